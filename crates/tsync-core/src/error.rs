//! Error types for tsync-core

use std::path::PathBuf;

/// Result type for tsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Removing generated artifacts failed. Logged, never propagated.
    #[error("Failed to clean up {path}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings failed validation
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from tsync-fs
    #[error(transparent)]
    Fs(#[from] tsync_fs::Error),

    /// Diff or rendering error from tsync-content
    #[error(transparent)]
    Content(#[from] tsync_content::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
