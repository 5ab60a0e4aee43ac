pub use reqwest::StatusCode;
use thiserror::Error;

/// All errors generated while loading a feed in `report-data`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("invalid feed url: {0}")]
    InvalidUrl(String),

    #[error("feed request to {url} returned non-success status: {status}")]
    Status { url: String, status: StatusCode },

    #[error("feed request failed: {0}")]
    Transport(String),

    #[error("failed to parse feed from {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl FeedError {
    /// Determine if the error came from the network rather than the payload.
    ///
    /// Both kinds abort the current refresh cycle; the distinction only changes
    /// how the failure is reported.
    pub fn is_network(&self) -> bool {
        matches!(self, FeedError::Status { .. } | FeedError::Transport(_))
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<url::ParseError> for FeedError {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidUrl(value.to_string())
    }
}
