//! HTTP transport seam.
//!
//! The prober and the plan client talk to the service through the
//! [`Transport`] trait. [`HttpTransport`] is the production implementation
//! on top of `reqwest`; tests substitute scripted transports.
//!
//! A transport only reports what happened on the wire. A completed exchange
//! is an `Ok` regardless of status code; only failures where no response
//! arrived are errors, already sorted into [`TransportError`] kinds.

use std::time::Duration;

use async_trait::async_trait;
use log::trace;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Failure to complete an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The client-side timeout expired
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The request was sent but no response came back (refused, DNS, offline)
    #[error("no response received: {0}")]
    Unreachable(String),
    /// Anything else, such as an invalid URL or a body read failure
    #[error("{0}")]
    Other(String),
}

/// Abstraction over the HTTP client used to reach the plan service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request with the given timeout.
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;

    /// Issues a POST with a JSON body, declaring JSON in and out.
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(&e, timeout))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(&e, timeout))?;
        trace!("HTTP {status}, {} bytes", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        self.execute(self.client.get(url), timeout).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body);
        self.execute(request, timeout).await
    }
}

fn classify(err: &reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_connect() || (err.is_request() && err.status().is_none()) {
        TransportError::Unreachable(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
