//! HTTP client for the EasyBroker API
//!
//! Builds authenticated requests from an [`Endpoint`], sends them through a
//! [`Transport`] and validates the status code for the verb used. There is no
//! retry, backoff or rate limiting: every failure is returned as-is.

use super::endpoint::Endpoint;
use super::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::models::{PropertyRecord, PROPERTIES_PATH};
use crate::types::{Method, StringMap};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const ACCEPT_JSON: &str = "application/json; charset=utf-8";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: StringMap::new(),
            user_agent: format!("easybroker-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Whether `status` is a success for `method`
pub fn validate_status(method: Method, status: u16) -> bool {
    method.accepts_status(status)
}

/// Authenticated HTTP client for the EasyBroker API
#[derive(Clone)]
pub struct HttpClient {
    config: HttpClientConfig,
    authenticator: Authenticator,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    /// Create a client that sends requests with reqwest
    pub fn new(config: HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, auth, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(
        config: HttpClientConfig,
        auth: AuthConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            authenticator: Authenticator::new(auth),
            transport,
        }
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the request for `endpoint` without sending it.
    ///
    /// Fails with an auth error when no credential is available. No network
    /// I/O happens here.
    pub fn build_request(&self, endpoint: &Endpoint, method: Method) -> Result<TransportRequest> {
        let url = endpoint.url(&self.config.base_url)?;

        let mut headers = HeaderMap::new();
        for (key, value) in &self.config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        self.authenticator.apply(&mut headers)?;

        let body = match &endpoint.body {
            Some(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(Bytes::from(serde_json::to_vec(value)?))
            }
            None => None,
        };

        Ok(TransportRequest {
            method,
            url,
            headers,
            body,
            timeout: self.config.timeout,
        })
    }

    /// Send a request and return the body if the status is valid for `method`
    pub async fn execute(&self, endpoint: &Endpoint, method: Method) -> Result<Bytes> {
        let request = self.build_request(endpoint, method)?;
        let url = request.url.clone();

        debug!("Sending request: {} {}", method, url);
        let response = self.transport.send(request).await?;

        if !validate_status(method, response.status) {
            debug!("Request failed: {} {} -> {}", method, url, response.status);
            return Err(Error::api(
                method.as_str(),
                url,
                response.status,
                response.text(),
            ));
        }

        debug!("Request succeeded: {} {} -> {}", method, url, response.status);
        Ok(response.body)
    }

    /// Make a GET request
    pub async fn get(&self, endpoint: &Endpoint) -> Result<Bytes> {
        self.execute(endpoint, Method::GET).await
    }

    /// Make a POST request
    pub async fn post(&self, endpoint: &Endpoint) -> Result<Bytes> {
        self.execute(endpoint, Method::POST).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<()> {
        self.execute(endpoint, Method::DELETE).await.map(|_| ())
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let body = self.get(endpoint).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a POST request and parse the JSON response
    pub async fn post_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let body = self.post(endpoint).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a single property by its public id
    pub async fn get_property(&self, public_id: &str) -> Result<PropertyRecord> {
        self.get_json(&Endpoint::new(PROPERTIES_PATH).id(public_id))
            .await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .finish_non_exhaustive()
    }
}
