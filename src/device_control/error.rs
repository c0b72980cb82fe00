use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to a MythTV frontend
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status: {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Unexpected response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("Action discovery failed after {attempts} attempts: {last_error}")]
    DiscoveryExhausted {
        attempts: u32,
        last_error: Box<FrontendError>,
    },

    #[error("Command {0} not found")]
    CommandNotFound(String),
}

impl FrontendError {
    /// Whether another attempt against a frontend that is still starting up may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FrontendError::Transport { .. }
                | FrontendError::Status { .. }
                | FrontendError::InvalidResponse { .. }
        )
    }
}
