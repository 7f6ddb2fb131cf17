//! HTTP client for the html-to-image rendering service
//!
//! Every endpoint takes the same POST body, `{"html": ..., "options": ...}`;
//! only the response shape differs per endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::error::{RenderError, Result};
use crate::options::{RenderOptions, SanitizeOptions};

/// Default service address (the service listens on port 15600).
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:15600";

const USER_AGENT: &str = concat!("htmlshot/", env!("CARGO_PKG_VERSION"));

/// Client for one render service instance
pub struct RenderClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ScreenshotIdResponse {
    #[serde(rename = "cacheId")]
    cache_id: String,
}

#[derive(Debug, Deserialize)]
struct SanitizeResponse {
    result: String,
}

impl RenderClient {
    /// Create a client with no request timeout.
    ///
    /// Rendering time depends entirely on the submitted document, so the
    /// request is allowed to run until the service answers; callers that
    /// want a deadline use [`RenderClient::with_timeout`].
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, None)
    }

    /// Create a client that aborts requests after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Render HTML via `/api/screenshot` and return the raw image bytes.
    ///
    /// The response body is returned as-is; nothing checks that it is a
    /// well-formed image.
    pub async fn screenshot(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>> {
        let resp = self.post("screenshot", html, options).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Render HTML via `/api/screenshot-id` and return the server-side
    /// cache id referencing the stored image.
    pub async fn screenshot_id(&self, html: &str, options: &RenderOptions) -> Result<String> {
        let resp = self.post("screenshot-id", html, options).await?;
        let body: ScreenshotIdResponse = resp.json().await?;
        Ok(body.cache_id)
    }

    /// Clean HTML via `/api/sanitize` and return the sanitized document.
    pub async fn sanitize(&self, html: &str, options: &SanitizeOptions) -> Result<String> {
        let resp = self.post("sanitize", html, options).await?;
        let body: SanitizeResponse = resp.json().await?;
        Ok(body.result)
    }

    /// URL under which the service serves a cached screenshot.
    pub fn cache_url(&self, cache_id: &str) -> String {
        format!("{}/cache/{}.png", self.base_url, cache_id)
    }

    async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        html: &str,
        options: &T,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/api/{}", self.base_url, endpoint);
        let body = json!({ "html": html, "options": options });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RenderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }
}
