use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the persistence layer regardless of the underlying backend.
///
/// Nothing here is retried: every failure is logged at the point it occurs
/// and then handed to the caller, which decides user-facing behavior.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend credentials are missing or unusable. Raised before any network
    /// call is attempted.
    #[error("storage not configured: {message}")]
    Configuration { message: String },
    /// The backend rejected a read or write, carrying the reason it reported.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A response payload did not have the expected shape.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}
