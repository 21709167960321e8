use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::error::MockError;
use crate::http::client::HttpClient;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;

use super::assert_request::RequestHandler;

type Queue = Mutex<VecDeque<Box<dyn RequestHandler>>>;

enum Handlers {
    Single(Box<dyn RequestHandler>),
    Sequence(Queue),
}

fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Box<dyn RequestHandler>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An [`HttpClient`] that never touches the network. Every request is passed
/// to a [`RequestHandler`], usually an
/// [`AssertRequest`](super::assert_request::AssertRequest).
pub struct MockHttpClient {
    handlers: Handlers,
}

impl MockHttpClient {
    /// Use `handler` for every request.
    pub fn new(handler: impl RequestHandler + 'static) -> Self {
        Self {
            handlers: Handlers::Single(Box::new(handler)),
        }
    }

    /// Use `handler` for every request. Unlike [`MockHttpClient::new`], the
    /// closure's argument and return types are inferred.
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<Arc<HttpResponse>, MockError> + Send + Sync + 'static,
    {
        Self::new(handler)
    }

    /// Use one handler per request, in order. A request arriving after the
    /// last handler was used fails with [`MockError::Exhausted`].
    pub fn sequence(handlers: Vec<Box<dyn RequestHandler>>) -> Self {
        Self {
            handlers: Handlers::Sequence(Mutex::new(handlers.into())),
        }
    }

    /// Handlers not yet consumed. `None` for a client built with [`MockHttpClient::new`].
    pub fn remaining(&self) -> Option<usize> {
        match &self.handlers {
            Handlers::Single(_) => None,
            Handlers::Sequence(queue) => Some(lock(queue).len()),
        }
    }

    /// Like [`HttpClient::execute`], but fails the running test instead of
    /// returning an error. A condition miss panics with the condition's
    /// message and nothing else.
    pub fn execute_or_fail(&self, request: &HttpRequest) -> Arc<HttpResponse> {
        match self.execute(request) {
            Ok(response) => response,
            Err(MockError::ConditionNotMet(failure)) => panic!("{}", failure.message()),
            Err(err) => panic!("{err}"),
        }
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        match &self.handlers {
            Handlers::Single(handler) => handler.handle(request),
            Handlers::Sequence(queue) => {
                let next = lock(queue).pop_front();
                match next {
                    Some(handler) => handler.handle(request),
                    None => Err(MockError::Exhausted {
                        method: request.method(),
                        target: request.target().to_string(),
                    }),
                }
            }
        }
    }
}

impl HttpClient for MockHttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        trace!(method = %request.method(), url = request.target(), "dispatching mocked request");

        let result = self.dispatch(request);
        match &result {
            Ok(response) => trace!(status = %response.status(), "mocked response returned"),
            Err(err) => debug!(
                method = %request.method(),
                url = request.target(),
                error = %err,
                "mocked request rejected"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AssertionFailure;
    use crate::http::method::HttpMethod;
    use crate::mock::assert_request::AssertRequest;
    use crate::mock::condition::Condition;

    use super::*;

    #[test]
    fn single_handler_answers_every_call() {
        let response = Arc::new(HttpResponse::ok());
        let client = MockHttpClient::new(AssertRequest::new(
            Arc::clone(&response),
            Condition::from_fn("", |_| true),
        ));
        let request = HttpRequest::get("http://test.com");

        for _ in 0..3 {
            let returned = client.execute(&request).unwrap();
            assert!(Arc::ptr_eq(&returned, &response));
        }
        assert_eq!(client.remaining(), None);
    }

    #[test]
    fn closure_handler_infers_its_signature() {
        let response = Arc::new(HttpResponse::ok());
        let shared = Arc::clone(&response);
        let client = MockHttpClient::from_fn(move |request| {
            if request.method() == HttpMethod::Get {
                Ok(Arc::clone(&shared))
            } else {
                Err(AssertionFailure::new("GET only").into())
            }
        });

        let get = HttpRequest::get("http://test.com");
        let returned = client.execute(&get).unwrap();
        assert!(Arc::ptr_eq(&returned, &response));

        let post = HttpRequest::post("http://test.com", "{}");
        let err = client.execute(&post).unwrap_err();
        assert_eq!(err.to_string(), "GET only");
    }

    #[test]
    fn sequence_consumes_handlers_in_order() {
        let first = Arc::new(HttpResponse::ok().with_body("first"));
        let second = Arc::new(HttpResponse::ok().with_body("second"));
        let handlers: Vec<Box<dyn RequestHandler>> = vec![
            Box::new(AssertRequest::new(
                Arc::clone(&first),
                Condition::uri_equals("expected /a", "http://some.test.com/a"),
            )),
            Box::new(AssertRequest::new(
                Arc::clone(&second),
                Condition::uri_equals("expected /b", "http://some.test.com/b"),
            )),
        ];
        let client = MockHttpClient::sequence(handlers);

        let a = client.execute(&HttpRequest::get("http://some.test.com/a"));
        assert!(Arc::ptr_eq(&a.unwrap(), &first));
        assert_eq!(client.remaining(), Some(1));

        let b = client.execute(&HttpRequest::get("http://some.test.com/b"));
        assert!(Arc::ptr_eq(&b.unwrap(), &second));
        assert_eq!(client.remaining(), Some(0));
    }

    #[test]
    fn sequence_reports_exhaustion() {
        let client = MockHttpClient::sequence(Vec::new());
        let request = HttpRequest::get("http://test.com");

        let err = client.execute(&request).unwrap_err();
        assert!(err.assertion_failure().is_none());
        assert_eq!(
            err.to_string(),
            "No mocked response left for GET http://test.com"
        );
    }

    #[test]
    #[should_panic(expected = "Test message")]
    fn execute_or_fail_panics_with_condition_message() {
        let client = MockHttpClient::new(AssertRequest::new(
            Arc::new(HttpResponse::ok()),
            Condition::uri_equals("Test message", "http://some.test.com/"),
        ));
        client.execute_or_fail(&HttpRequest::get("http://test.com"));
    }

    #[test]
    #[should_panic(expected = "No mocked response left")]
    fn execute_or_fail_panics_when_sequence_is_exhausted() {
        let client = MockHttpClient::sequence(Vec::new());
        client.execute_or_fail(&HttpRequest::get("http://test.com"));
    }
}
