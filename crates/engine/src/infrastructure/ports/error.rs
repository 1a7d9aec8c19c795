//! Error types for port operations.

/// Sheet loading errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Sheet not found - includes the reference that was asked for.
    #[error("Sheet not found: {0}")]
    NotFound(String),

    /// Reading from the backing store failed.
    #[error("I/O error reading {reference}: {message}")]
    Io { reference: String, message: String },

    /// The stored bytes are not JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn not_found(reference: impl ToString) -> Self {
        Self::NotFound(reference.to_string())
    }

    pub fn io(reference: impl ToString, error: impl std::fmt::Display) -> Self {
        Self::Io {
            reference: reference.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
