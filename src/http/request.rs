use url::Url;

use crate::error::RequestError;

use super::method::HttpMethod;

/// An outbound call as seen by a mocked client. Never modified once built
/// and handed to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    target: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, target)
    }

    pub fn post(target: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, target).body(body)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The target exactly as it was given.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// First value of the named header. Names compare case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body_text(&self) -> &str {
        &self.body
    }

    /// Resolve the target into a normalized absolute URI.
    ///
    /// `http://some.test.com` resolves to `http://some.test.com/`.
    pub fn uri(&self) -> Result<Url, RequestError> {
        Url::parse(self.target.trim()).map_err(|source| RequestError::InvalidUri {
            target: self.target.clone(),
            source,
        })
    }
}
