use thiserror::Error;

/// Shown whenever a fetch fails for a reason other than a service-reported error.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch issues. Please try again.";

#[derive(Debug, Error)]
pub enum SearchError {
    /// The service answered with an error message of its own.
    #[error("{0}")]
    Service(String),

    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Message handed to the view layer. Service messages pass through
    /// verbatim, everything else collapses to [`GENERIC_FETCH_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Service(message) | SearchError::Unauthorized(message) => message.clone(),
            SearchError::Transport(_) | SearchError::Decode(_) => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}
