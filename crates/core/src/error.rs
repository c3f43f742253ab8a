//! Error types for the TaaS portal

use thiserror::Error;

/// Result type alias using the portal Error
pub type Result<T> = std::result::Result<T, Error>;

/// Portal error types
///
/// The three network failure kinds (transport, non-2xx status, malformed
/// body) are distinct variants so callers can tell them apart, but the
/// session controller treats all of them the same way: log and move on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("device hub returned HTTP {status} for {operation}")]
    Status { operation: &'static str, status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
