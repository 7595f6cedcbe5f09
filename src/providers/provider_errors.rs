//! Error types for remote rate-provider operations.

use thiserror::Error;

/// Status reported for failures where the upstream never produced a usable
/// answer: transport errors and malformed bodies.
const BAD_GATEWAY: u16 = 502;

/// Errors that can occur while fetching rates from the remote provider.
///
/// No retry policy lives at this layer; retrying, if any, belongs to the
/// caller.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-200 HTTP status. Carries the
    /// provider's reported code; the error body is not assumed to be
    /// well-formed JSON.
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed: connection refused, timeout, TLS failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered 200 but the body did not match the documented
    /// response shape.
    #[error("malformed provider response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// The HTTP status callers should report for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            ProviderError::Status { status, .. } => *status,
            ProviderError::Transport(_) | ProviderError::Parse(_) => BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}
