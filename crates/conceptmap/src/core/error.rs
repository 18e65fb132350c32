//! Core error types for concept-map processing
//!
//! Malformed entries and lines are skipped rather than reported, so these
//! errors only cover broken invariants and unreadable input.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Core error types for concept-map processing
#[derive(Error, Debug)]
pub enum ConceptMapError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Failed to read input file '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ConceptMapError {
    /// Create a new database error
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create an error for an input file that could not be read
    pub fn input_error(path: &Path, source: std::io::Error) -> Self {
        Self::Input {
            path: path.to_path_buf(),
            source,
        }
    }
}
