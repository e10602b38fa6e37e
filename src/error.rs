//! Error types for fetching and normalizing sensor data.

use thiserror::Error;

/// Errors that can occur when fetching readings from a sensor source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed at the transport level (network failure or
    /// non-2xx HTTP status). The message carries the status line when
    /// one was available.
    #[error("{0}")]
    Transport(String),

    /// The history endpoint returned an empty or malformed sequence.
    #[error("history response is empty or malformed")]
    EmptyHistory,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport("request timed out".to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// A sample carried a timestamp that does not parse as an instant.
///
/// Raised during normalization; aborts the whole batch rather than
/// letting a bad point through.
#[derive(Debug, Error)]
#[error("invalid timestamp {raw:?}: {source}")]
pub struct InvalidTimestamp {
    /// The raw timestamp string as received from the source.
    pub raw: String,
    #[source]
    pub source: chrono::ParseError,
}
