//! HTTP transport used by the StormGlass client
//!
//! The client talks to the network only through [`HttpTransport`], so tests
//! and embedders can substitute their own implementation. [`ReqwestTransport`]
//! is the default.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

/// Extra settings applied to a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty request options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to the request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Headers in insertion order
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value by case-insensitive name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A successful response with its decoded body
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Body as JSON, or a JSON string holding the raw text if it was not JSON
    pub data: Value,
}

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status
    #[error("Request failed with status code {status}")]
    Response {
        /// HTTP status code
        status: u16,
        /// Body as JSON, or a JSON string holding the raw text if it was not JSON
        data: Value,
    },

    /// No response was received
    #[error("{0}")]
    Request(String),
}

impl TransportError {
    /// Returns true if the server produced a response
    #[must_use]
    pub const fn is_response_error(&self) -> bool {
        matches!(self, Self::Response { .. })
    }
}

/// Minimal asynchronous HTTP interface
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request and decode the body
    async fn get(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("surfcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Decode a body as JSON, keeping non-JSON text as a string value
fn decode_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, options))]
    async fn get(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let request = options
            .headers()
            .iter()
            .fold(self.client.get(url), |req, (name, value)| {
                req.header(name.as_str(), value.as_str())
            });

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        debug!(status = %status, bytes = body.len(), "Received response");

        let data = decode_body(&body);
        if !status.is_success() {
            return Err(TransportError::Response {
                status: status.as_u16(),
                data,
            });
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            data,
        })
    }
}
