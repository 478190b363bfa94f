// HTTP backend client

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};
use crate::traits::BackendClient;
use crate::types::{extract_reply, ChatMessage, ChatRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Backend client that POSTs the history as JSON (HTTP direct, no SDK)
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http_client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http_client, config })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.config.endpoint()
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn send(&self, history: Vec<ChatMessage>) -> Result<String> {
        let endpoint = self.endpoint().ok_or(BackendError::NotConfigured)?;
        let payload = ChatRequest::new(history);

        tracing::debug!(endpoint, messages = payload.messages.len(), "Sending chat history");

        let response = self
            .http_client
            .post(endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(endpoint, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            tracing::warn!(endpoint, status = status.as_u16(), "Backend returned an error");
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let body: Value = serde_json::from_str(&raw)?;
        Ok(extract_reply(&body))
    }
}
