//! Error types for tsync-content

/// Result type for tsync-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsync-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A comparison or review document could not be produced.
    #[error("Diff computation failed: {message}")]
    DiffComputation { message: String },

    #[error("Failed to render document: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl Error {
    pub fn diff(message: impl Into<String>) -> Self {
        Self::DiffComputation {
            message: message.into(),
        }
    }
}
