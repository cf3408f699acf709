//! # Domain Errors
//!
//! Error types for the suggestion client.

use thiserror::Error;

/// Suggestion client error types.
///
/// Callers that drive interactive input are expected to log these and
/// treat the field as having no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Network failure or timeout while talking to the service.
    #[error("Suggestion transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("Suggestion service returned status {status}: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body is not a suggestion document.
    #[error("Failed to decode suggestion response: {0}")]
    Decode(String),

    /// The query was rejected locally, no request was sent.
    #[error("Invalid suggestion query: {0}")]
    InvalidQuery(String),
}

impl SuggestError {
    /// True for failures raised by the remote service itself.
    pub fn is_remote(&self) -> bool {
        matches!(self, SuggestError::Remote { .. })
    }
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SuggestError::Decode(err.to_string())
        } else {
            SuggestError::Transport(err.to_string())
        }
    }
}
