//! # Conditions
//!
//! A condition is a predicate over an incoming [`HttpRequest`] paired with the
//! message reported when the predicate does not hold.

use std::fmt;

use serde_json::Value;

use crate::error::RequestError;
use crate::http::method::HttpMethod;
use crate::http::request::HttpRequest;

type Predicate = Box<dyn Fn(&HttpRequest) -> Result<bool, RequestError> + Send + Sync>;

pub struct Condition {
    message: String,
    predicate: Predicate,
}

impl Condition {
    /// A condition whose predicate may fail to evaluate, for example because
    /// the request target is not a valid URI. Such failures are returned by
    /// [`Condition::matches`] rather than being read as a mismatch.
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<bool, RequestError> + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn from_fn<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&HttpRequest) -> bool + Send + Sync + 'static,
    {
        Self::new(message, move |request| Ok(predicate(request)))
    }

    /// Holds when the normalized request URI renders exactly as `expected`.
    pub fn uri_equals(message: impl Into<String>, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self::new(message, move |request| {
            Ok(request.uri()?.as_str() == expected)
        })
    }

    pub fn method_is(message: impl Into<String>, method: HttpMethod) -> Self {
        Self::from_fn(message, move |request| request.method() == method)
    }

    pub fn header_equals(
        message: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let value = value.into();
        Self::from_fn(message, move |request| {
            request.header_value(&name) == Some(value.as_str())
        })
    }

    pub fn body_equals(message: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::from_fn(message, move |request| request.body_text() == body)
    }

    /// Holds when the body is JSON and satisfies `check`. A body that is not
    /// JSON does not match.
    pub fn json_body<F>(message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::from_fn(message, move |request| {
            serde_json::from_str::<Value>(request.body_text())
                .map(|body| check(&body))
                .unwrap_or(false)
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn matches(&self, request: &HttpRequest) -> Result<bool, RequestError> {
        (self.predicate)(request)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
