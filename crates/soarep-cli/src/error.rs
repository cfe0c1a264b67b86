//! Error types for soarep-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for soarep-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soarep-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from soarep-client
    #[error(transparent)]
    Client(#[from] soarep_client::Error),

    /// File I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
