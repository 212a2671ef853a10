//! Error types for Interview Assist.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Submission pipeline errors.
///
/// The variants mirror the failure taxonomy of the submit flow:
/// `Validation` is local and pre-network, `Remote` means the service
/// responded with a failure, `Transport` means no response was obtained,
/// `InFlight` means a submission was already running. Persistence
/// failures are deliberately absent — the pipeline absorbs them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    /// Required fields missing or blank after trimming. No message is
    /// carried; the blocked control is the user-facing signal.
    #[error("Draft failed local validation")]
    Validation,

    /// The creation service responded with a non-success status.
    #[error("Creation service rejected the request: {message}")]
    Remote { message: String },

    /// The request never produced a response (connection failure, timeout).
    #[error("Could not reach the creation service: {message}")]
    Transport { message: String },

    /// A submission attempt is already awaiting the remote service.
    #[error("A submission is already in flight")]
    InFlight,
}

/// Persistence store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open store: {0}")]
    Open(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Session not found: {id}")]
    NotFound { id: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
