// src/markup/mod.rs

//! Wikitext → Discord markdown rewriting.
//!
//! The rewriting pipeline is line-oriented:
//! - `body` filters the thread body down to its list-item lines,
//! - `inline` converts bold/italic runs and bracket links on each line,
//! - `links` resolves internal wiki link targets to absolute URLs.

pub mod body;
pub mod inline;
pub mod links;

pub use body::assemble;
pub use inline::InlineRewriter;
