use std::sync::Arc;

use crate::error::{AssertionFailure, MockError};
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;

use super::condition::Condition;

/// Answers one request on behalf of a mock client.
pub trait RequestHandler: Send + Sync {
    fn handle(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError>;
}

impl<F> RequestHandler for F
where
    F: Fn(&HttpRequest) -> Result<Arc<HttpResponse>, MockError> + Send + Sync,
{
    fn handle(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        self(request)
    }
}

/// Returns a canned response, but only to a request that satisfies every
/// condition.
///
/// Conditions are checked in the order they were added, each at most once.
/// The first one that does not hold supplies the failure message.
#[derive(Debug)]
pub struct AssertRequest {
    response: Arc<HttpResponse>,
    conditions: Vec<Condition>,
}

impl AssertRequest {
    pub fn new(response: Arc<HttpResponse>, condition: Condition) -> Self {
        Self {
            response,
            conditions: vec![condition],
        }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn response(&self) -> &Arc<HttpResponse> {
        &self.response
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl RequestHandler for AssertRequest {
    fn handle(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        for condition in &self.conditions {
            if !condition.matches(request)? {
                return Err(AssertionFailure::new(condition.message()).into());
            }
        }
        Ok(Arc::clone(&self.response))
    }
}
