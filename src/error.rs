//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, JSON and HTTP errors, and provides semantic variants
//! for check-list validation and network failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checks must be a JSON array of selector strings, got: {found}")]
    ChecksNotArray { found: String },

    #[error("Invalid check at index {index}: {reason}")]
    InvalidCheck { index: usize, reason: String },

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no response from server ({0})")]
    NoResponse(#[source] reqwest::Error),

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot block on a URL check from inside an async runtime; await `check_url` instead")]
    InsideRuntime,
}

impl Error {
    /// True for failures of the single network fetch on the URL path.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::NoResponse(_) | Error::HttpStatus { .. } | Error::Http(_)
        )
    }
}
