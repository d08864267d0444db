//! Error types for the Rhymer library.
//!
//! All fallible operations return [`Result`], which carries a [`RhymerError`].
//! The analysis pipeline itself degrades gracefully on odd input; errors come
//! from configuration handling, I/O in the command line front end and JSON
//! export.
//!
//! # Examples
//!
//! ```
//! use rhymer::error::{RhymerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RhymerError::config("perfectThreshold must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Rhymer operations.
#[derive(Error, Debug)]
pub enum RhymerError {
    /// I/O errors (reading input text, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (missing fields, non-finite thresholds)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with RhymerError.
pub type Result<T> = std::result::Result<T, RhymerError>;

impl RhymerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RhymerError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RhymerError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RhymerError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RhymerError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
