// src/error.rs

//! Unified error handling for the announcer application.

use std::fmt;

use thiserror::Error;

/// Result type alias for announcer operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Board listing could not be parsed into threads
    #[error("Listing error: {0}")]
    Listing(String),

    /// Board API reported a failure or returned an unusable payload
    #[error("Board error for {context}: {message}")]
    Board { context: String, message: String },

    /// A wiki link target that cannot be resolved to a URL
    #[error("Malformed link target: {0}")]
    MalformedLink(String),

    /// Watermark could not be read or persisted
    #[error("Watermark error: {0}")]
    Watermark(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a listing error.
    pub fn listing(message: impl Into<String>) -> Self {
        Self::Listing(message.into())
    }

    /// Create a board error with context.
    pub fn board(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Board {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a watermark error.
    pub fn watermark(message: impl Into<String>) -> Self {
        Self::Watermark(message.into())
    }
}
