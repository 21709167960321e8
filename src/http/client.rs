use std::sync::Arc;

use crate::error::MockError;

use super::request::HttpRequest;
use super::response::HttpResponse;

/// The surface client code sends requests through.
///
/// Responses are shared so a caller can tell, with [`Arc::ptr_eq`], that it got
/// back the very instance it configured.
pub trait HttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn execute(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        (**self).execute(request)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn execute(&self, request: &HttpRequest) -> Result<Arc<HttpResponse>, MockError> {
        (**self).execute(request)
    }
}
