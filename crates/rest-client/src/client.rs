//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Generic REST client for making HTTP requests.
///
/// Paths are passed pre-encoded (query string included) and POST bodies as
/// exact strings: the exchange signs the literal path and body bytes, so the
/// transport layer must never re-serialize or reorder what it is given.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL and timeout.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.bitget.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// # Arguments
    /// * `request_path` - Request path including any query string
    ///   (e.g., "/api/mix/v1/market/ticker?symbol=BTCUSDT_UMCBL")
    /// * `headers` - Additional headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        request_path: &str,
        headers: &[(String, String)],
    ) -> Result<T, RestError> {
        let url = self.build_url(request_path);
        tracing::debug!(url = %url, "GET request");

        let mut request = self.client.get(&url);
        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a pre-serialized body.
    ///
    /// # Arguments
    /// * `request_path` - Request path including any query string
    /// * `body` - Exact body string to send (already signed by the caller)
    /// * `headers` - Additional headers
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        request_path: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<T, RestError> {
        let url = self.build_url(request_path);
        tracing::debug!(url = %url, "POST request");

        let mut request = self.client.post(&url).body(body.to_string());
        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from a pre-encoded request path.
    fn build_url(&self, request_path: &str) -> String {
        format!("{}{}", self.base_url, request_path)
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}
