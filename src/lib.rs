pub mod error;
pub mod http;
pub mod mock;

pub use error::{AssertionFailure, MockError, RequestError};
pub use http::client::HttpClient;
pub use http::method::HttpMethod;
pub use http::request::HttpRequest;
pub use http::response::HttpResponse;
pub use mock::{AssertRequest, Condition, MockHttpClient, RequestHandler};
