//! reqwest-backed client. On wasm32 reqwest runs on the browser's fetch.

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpClient, HttpError, HttpResponse, HttpResult};

#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self { inner: reqwest::Client::new() }
    }
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    async fn read(response: reqwest::Response) -> HttpResult<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| HttpError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str) -> HttpResult<HttpResponse> {
        tracing::debug!(url, "GET");
        let response = self.inner.get(url).send().await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> HttpResult<HttpResponse> {
        tracing::debug!(url, "POST");
        let response = self.inner.post(url).json(body).send().await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}
