//! Transport boundary
//!
//! The client never talks to the network directly; it hands a fully built
//! [`TransportRequest`] to a [`Transport`] and gets back a status and body.
//! Tests swap in their own implementation.

use crate::error::{Error, Result};
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// A fully assembled outgoing request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Duration,
}

/// Status and raw body of a response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a request and returns the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    /// Network-level failures (DNS, refused connection, timeout) are
    /// reported as transport errors. Non-2xx statuses are not errors here.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a reqwest client with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let timeout = request.timeout;
        let mut req = self
            .client
            .request(request.method.into(), &request.url)
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        Ok(TransportResponse { status, body })
    }
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        Error::from(err)
    }
}
