//! # EasyBroker Client
//!
//! A typed client for the EasyBroker real-estate listing API.
//!
//! ## Features
//!
//! - **Authenticated requests**: API key sent in the `X-Authorization` header
//! - **Per-verb status validation**: GET 200, POST 200/201, DELETE 204
//! - **Typed records**: properties, operations and commissions
//! - **Transparent pagination**: walk every page of a collection, with a
//!   guard against servers that repeat the same page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use easybroker_client::{AuthConfig, HttpClient, HttpClientConfig, Lister, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.stagingeb.com")
//!         .build();
//!     let client = HttpClient::new(config, AuthConfig::from_env("API_KEY"))?;
//!
//!     for property in Lister::new(&client).list_properties().await? {
//!         println!("{}", property.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Lister: page=<n>&limit=50 → decode → emit → advance │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────┐
//! │  HttpClient: URL + auth header → send → check status │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────┐
//! │  Transport: reqwest (or any swappable implementation)│
//! └──────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// API key authentication
pub mod auth;

/// Request construction, dispatch and status validation
pub mod http;

/// Pagination envelope and page cursor
pub mod pagination;

/// Listing record types
pub mod models;

/// Listing engine
pub mod engine;

/// YAML client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthConfig, CredentialSource};
pub use config::ClientConfig;
pub use engine::{ListConfig, ListSummary, Lister};
pub use error::{Error, ErrorKind, Result};
pub use http::{Endpoint, HttpClient, HttpClientConfig, Transport};
pub use models::{Commission, CommissionValue, Operation, PropertyRecord};
pub use pagination::{ListingPage, Pagination, StopReason};
pub use types::Method;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
