//! Unified SDK error types.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Transport failure: connect, timeout, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope was structurally broken (missing or non-numeric
    /// success flag, or a listing payload that is not an array).
    /// Distinct from [`SdkError::Api`], which is a failure the exchange
    /// itself declared.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The exchange declared the call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A raw payload record could not be mapped to a domain record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// An API-level failure, carrying the exchange's error message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API error: {message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Domain-record mapping errors.
///
/// Missing fields and unparseable numeric fields are kept as separate
/// variants so callers can tell a truncated record from a corrupted one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed {record} record: missing field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("malformed {record} record: field `{field}` is not numeric: {value}")]
    InvalidNumericField {
        record: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("malformed {record} record: field `{field}` has the wrong type: {value}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        value: String,
    },
}
