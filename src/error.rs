//! Error types for the EasyBroker client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Variants are grouped into the four failure families a caller cares about
//! (auth, transport, API, decode) plus configuration errors raised by the
//! binary and the YAML config loader.

use thiserror::Error;

/// The main error type for the EasyBroker client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API error: {method} {url} returned HTTP {status}: {body}")]
    Api {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Transport,
    Api,
    Decode,
    Config,
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an API error carrying the raw response body
    pub fn api(
        method: impl Into<String>,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::Api {
            method: method.into(),
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Which failure family this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Auth { .. } => ErrorKind::Auth,
            Error::Transport { .. } | Error::Timeout { .. } => ErrorKind::Transport,
            Error::Api { .. } => ErrorKind::Api,
            Error::JsonParse(_) | Error::InvalidUrl(_) | Error::Decode { .. } => ErrorKind::Decode,
            Error::Config { .. } | Error::YamlParse(_) | Error::Io(_) => ErrorKind::Config,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_api(&self) -> bool {
        self.kind() == ErrorKind::Api
    }

    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw server body of an API error
    pub fn api_body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Error::transport(format!("connection failed: {err}"))
        } else {
            Error::transport(err.to_string())
        }
    }
}

/// Result type alias for the EasyBroker client
pub type Result<T> = std::result::Result<T, Error>;
