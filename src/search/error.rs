//! Failure kinds of a single search request.

use thiserror::Error;

/// Message shown when no interpretable response could be obtained.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Errors that can end a search request.
///
/// Both kinds are terminal for the attempt; there is no automatic retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The service answered with a non-success status and a structured
    /// error message.
    #[error("Search service error: {status} - {message}")]
    Service { status: u16, message: String },

    /// No interpretable response: connection failure, broken body, or a
    /// payload that does not match the contract.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SearchError {
    /// User-facing message for the error banner.
    pub fn user_message(&self) -> &str {
        match self {
            SearchError::Service { message, .. } => message,
            SearchError::Transport(_) => NETWORK_ERROR_MESSAGE,
        }
    }

    /// Error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::Service { .. } => "service_error",
            SearchError::Transport(_) => "transport_error",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}
