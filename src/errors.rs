/*!
 * Error types for the modalswap application.
 *
 * This module contains custom error types for the migration,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while migrating a batch of page files
#[derive(Error, Debug)]
pub enum MigrationError {
    /// A target file could not be read (permissions, I/O, invalid UTF-8)
    #[error("Failed to read file {path:?}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A target file could not be written back
    #[error("Failed to write file {path:?}: {source}")]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The block pattern could not be compiled
    #[error("Invalid block pattern: {0}")]
    InvalidPattern(String),

    /// The configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<regex::Error> for MigrationError {
    fn from(error: regex::Error) -> Self {
        Self::InvalidPattern(error.to_string())
    }
}

/// Convenience alias used throughout the library
pub type MigrationResult<T> = std::result::Result<T, MigrationError>;
