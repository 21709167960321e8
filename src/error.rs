use thiserror::Error;

use crate::http::method::HttpMethod;

/// Errors produced while dispatching a request through a mock client.
#[derive(Debug, Error)]
pub enum MockError {
    /// The request was well formed but a condition did not hold.
    #[error(transparent)]
    ConditionNotMet(#[from] AssertionFailure),
    /// A condition could not be evaluated against the request.
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
    #[error("No mocked response left for {method} {target}")]
    Exhausted { method: HttpMethod, target: String },
}

/// Raised when a request fails to resolve into something a condition can
/// inspect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid request target `{target}`: {source}")]
    InvalidUri {
        target: String,
        #[source]
        source: url::ParseError,
    },
}

/// Assertion-style failure. Renders as the configured message and nothing
/// else, which may be the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl MockError {
    /// The failure message when a condition did not hold.
    pub fn assertion_failure(&self) -> Option<&AssertionFailure> {
        match self {
            MockError::ConditionNotMet(failure) => Some(failure),
            _ => None,
        }
    }
}
