//! Error types for menu loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// A token that is not a non-negative integer
    #[error("malformed menu token '{token}' at position {position}")]
    Malformed { token: String, position: usize },

    /// The input contained no complete (wing count, price) pair
    #[error("the menu may not be empty")]
    Empty,

    /// Failed to read a menu file
    #[error("failed to read menu file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error while reading a stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
