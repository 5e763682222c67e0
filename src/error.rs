use thiserror::Error;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum CarHubError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    /// Contains the HTTP status code and raw body.
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus { code: u16, body: String },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}
