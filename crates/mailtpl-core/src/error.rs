//! Error types for mailtpl-core

use thiserror::Error;

/// Result type alias using mailtpl-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mailtpl-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The config store has not finished loading
    #[error("Auth config has not been loaded yet")]
    NotLoaded,

    /// A submission for this form is already in flight
    #[error("An update is already in progress")]
    SubmitInProgress,

    /// The caller lacks the capability for the requested action
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
