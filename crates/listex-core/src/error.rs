//! Error types for the listex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the listex library.
#[derive(Error, Debug)]
pub enum ListexError {
    /// Document loading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to loading the input document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input file does not exist, or vanished before it could be read.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input content is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),
}

/// Result type for the listex library.
pub type Result<T> = std::result::Result<T, ListexError>;
