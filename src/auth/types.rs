//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Header the API key is sent in
pub const DEFAULT_AUTH_HEADER: &str = "X-Authorization";

/// Environment variable the API key is read from by default
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Where the API key comes from
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// A fixed key supplied at construction time
    Static(String),
    /// An environment variable, re-read on every request
    Env {
        /// Variable name
        var: String,
    },
}

impl CredentialSource {
    /// Read the key from an environment variable
    pub fn env(var: impl Into<String>) -> Self {
        Self::Env { var: var.into() }
    }

    /// Use a fixed key
    pub fn key(value: impl Into<String>) -> Self {
        Self::Static(value.into())
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::env(DEFAULT_API_KEY_ENV)
    }
}

// Keys must never reach logs through Debug output.
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("Static(<redacted>)"),
            Self::Env { var } => f.debug_struct("Env").field("var", var).finish(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Header name carrying the key
    pub header_name: String,
    /// Where the key comes from
    pub source: CredentialSource,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_AUTH_HEADER.to_string(),
            source: CredentialSource::default(),
        }
    }
}

impl AuthConfig {
    /// API key read from the given environment variable
    pub fn from_env(var: impl Into<String>) -> Self {
        Self {
            source: CredentialSource::env(var),
            ..Default::default()
        }
    }

    /// Fixed API key
    pub fn api_key(value: impl Into<String>) -> Self {
        Self {
            source: CredentialSource::key(value),
            ..Default::default()
        }
    }

    /// Override the header name
    #[must_use]
    pub fn with_header(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }
}
