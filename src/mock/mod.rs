//! # Mock HTTP Client
//!
//! Test doubles for code written against [`HttpClient`](crate::http::client::HttpClient).
//! A [`MockHttpClient`] hands each request to an [`AssertRequest`], which
//! answers with a canned response when its [`Condition`]s hold and with an
//! assertion failure carrying the condition's message when they do not.

pub mod assert_request;
pub mod client;
pub mod condition;

pub use assert_request::{AssertRequest, RequestHandler};
pub use client::MockHttpClient;
pub use condition::Condition;
