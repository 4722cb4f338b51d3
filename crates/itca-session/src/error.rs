//! Error types for the session layer.
//!
//! The `Display` text of every variant is what the user sees on the console.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while writing a session log to disk. Never fatal.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not serialize session log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading a log file for viewing. Never fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: File not found at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "Error: Could not decode JSON from '{}'. File might be corrupted or not valid JSON.",
        path.display()
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("An unexpected error occurred while loading {}: {source}", path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
