//! HTTP transport behind a trait so the controller can be driven by fakes.

mod client;

pub use client::ReqwestClient;

use async_trait::async_trait;
use serde_json::Value;

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Any 2xx counts as success, like `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport failure: the request never produced a response.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("encode body: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type HttpResult<T> = Result<T, HttpError>;

#[async_trait(?Send)]
pub trait HttpClient {
    /// GET `url` and read the body as text.
    async fn get_text(&self, url: &str) -> HttpResult<HttpResponse>;

    /// POST `body` as `application/json` and read the response body as text.
    async fn post_json(&self, url: &str, body: &Value) -> HttpResult<HttpResponse>;
}
