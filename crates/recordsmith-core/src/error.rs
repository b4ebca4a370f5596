use thiserror::Error;

/// Core error type shared across recordsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The metadata collaborator failed to list or describe a type.
    #[error("metadata error: {0}")]
    Metadata(String),
    /// The identity collaborator could not supply the current user or profile.
    #[error("identity error: {0}")]
    Identity(String),
    /// A generated record could not be stored.
    #[error("persistence error: {0}")]
    Persistence(String),
    /// The catalog violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by recordsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
