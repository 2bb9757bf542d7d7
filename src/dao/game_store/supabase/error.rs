//! Error types shared by the Supabase storage implementation.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`SupabaseDaoError`] failures.
pub type SupabaseResult<T> = Result<T, SupabaseDaoError>;

/// Failures that can occur while talking to the Supabase REST endpoint.
#[derive(Debug, Error)]
pub enum SupabaseDaoError {
    /// Required environment variable is missing or empty.
    #[error(
        "missing Supabase environment variable `{var}`; \
         set the project URL and anon key before connecting"
    )]
    MissingEnvVar { var: &'static str },
    /// Explicitly supplied configuration carries an empty URL or key.
    #[error("Supabase {field} is empty; supply the project URL and anon key")]
    EmptyCredential { field: &'static str },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Supabase client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request to the REST endpoint could not be sent.
    #[error("failed to send Supabase request to `{path}`")]
    RequestSend {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend rejected a read or write; carries the reason it reported.
    #[error("Supabase rejected request to `{path}` with status {status}: {message}")]
    Rejected {
        path: String,
        status: StatusCode,
        message: String,
    },
    /// Rendering a game date as RFC 3339 failed.
    #[error("failed to format game date")]
    FormatDate {
        #[source]
        source: time::error::Format,
    },
    /// Response payload could not be parsed as JSON.
    #[error("failed to decode Supabase response for `{path}`")]
    DecodeResponse {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The top-level select payload was not a JSON array of rows.
    #[error("expected a JSON array of rows from `{path}`, got {found}")]
    UnexpectedPayload { path: String, found: &'static str },
    /// A stored row could not be read as a game row object.
    #[error("failed to deserialize stored game row")]
    DeserializeRow {
        #[source]
        source: serde_json::Error,
    },
    /// A stored `players` array holds entries that are not player objects.
    #[error("failed to deserialize stored players list")]
    DeserializePlayers {
        #[source]
        source: serde_json::Error,
    },
    /// A stored `date` is neither an RFC 3339 string nor a Unix timestamp.
    #[error("stored game date is neither a date string nor a timestamp: {found}")]
    MalformedDate { found: String },
}
