// src/lib.rs

//! herald: polls a Fandom forum board and announces new threads to a
//! Discord webhook.

pub mod board;
pub mod error;
pub mod markup;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
