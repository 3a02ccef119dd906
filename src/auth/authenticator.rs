//! Authenticator implementation
//!
//! Resolves the API key and places it on outgoing request headers.

use super::types::{AuthConfig, CredentialSource};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Authenticator applies the API key header to requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Auth configuration in use
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve the current credential.
    ///
    /// Environment-backed sources are read on every call. An unset or empty
    /// key is an auth error.
    pub fn credential(&self) -> Result<String> {
        let key = match &self.config.source {
            CredentialSource::Static(value) => value.clone(),
            CredentialSource::Env { var } => std::env::var(var).unwrap_or_default(),
        };

        if key.is_empty() {
            return Err(match &self.config.source {
                CredentialSource::Static(_) => Error::auth("missing credential"),
                CredentialSource::Env { var } => {
                    Error::auth(format!("missing credential: {var} is not set"))
                }
            });
        }

        Ok(key)
    }

    /// Insert the auth header into `headers`
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let key = self.credential()?;

        let name = HeaderName::from_bytes(self.config.header_name.as_bytes()).map_err(|e| {
            Error::config(format!(
                "invalid auth header name '{}': {e}",
                self.config.header_name
            ))
        })?;
        let mut value = HeaderValue::from_str(&key)
            .map_err(|_| Error::auth("credential contains characters not allowed in a header"))?;
        value.set_sensitive(true);

        headers.insert(name, value);
        Ok(())
    }
}
