//! Error handling module for the morlex CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the morlex CLI application.
#[derive(Error, Debug)]
pub enum MorlexError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more files produced lexer diagnostics.
    #[error("{0} file(s) failed to lex")]
    LexFailed(usize),
}

/// Result type alias using MorlexError.
pub type Result<T> = std::result::Result<T, MorlexError>;
