use thiserror::Error;
use warp::http::StatusCode;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Represents a complaint with no text besides whitespace.
    #[error("Please enter a complaint.")]
    EmptyComplaint,

    /// Represents a request body that could not be parsed.
    #[error("Malformed submission: {0}")]
    MalformedSubmission(#[source] serde_json::Error),

    /// Represents a request for too many recent complaints.
    #[error("Invalid limit {0}")]
    InvalidLimit(u32),

    /// Represents an SQL error.
    #[error("SQLx error: {source}")]
    Sqlx {
        #[from]
        source: sqlx::Error,
    },
}

/// Enumerates errors returned when talking to a remote server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Represents a complaint rejected before sending it.
    #[error("Please describe your complaint before submitting.")]
    EmptyComplaint,

    /// Represents a server URL that cannot be extended with a path.
    #[error("Invalid server URL: {source}")]
    InvalidUrl {
        #[from]
        source: url::ParseError,
    },

    /// Represents a failure to connect, send, or read the response.
    #[error("Something went wrong. Please try again later.")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// Represents any response other than `200 OK`.
    #[error("Something went wrong. Please try again later.")]
    UnexpectedStatus(StatusCode),
}
