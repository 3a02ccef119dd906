//! HTTP module
//!
//! Turns an [`Endpoint`] plus a [`Method`](crate::types::Method) into exactly
//! one validated response body.
//!
//! # Features
//!
//! - **URL assembly**: `base/resource[/id][?query]`
//! - **Authentication**: API key header injected per request
//! - **Status validation**: per-verb success codes (GET 200, POST 200/201, DELETE 204)
//! - **Swappable transport**: any [`Transport`] implementation, reqwest by default

mod client;
mod endpoint;
mod transport;

pub use client::{
    validate_status, HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use endpoint::Endpoint;
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};


#[cfg(test)]
pub(crate) mod testing;
