//! Client configuration
//!
//! A YAML file (or string) describing where the API lives, how long to wait,
//! where the API key comes from and how large listing pages are. Every field
//! is optional; anything left out falls back to the library defaults.
//!
//! ```yaml
//! base_url: https://api.stagingeb.com
//! timeout_secs: 30
//! api_key_env: EASYBROKER_API_KEY
//! page_size: 50
//! ```

use crate::auth::{AuthConfig, CredentialSource, DEFAULT_AUTH_HEADER};
use crate::engine::ListConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Client configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Inline API key; takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Header carrying the API key
    #[serde(default)]
    pub auth_header: Option<String>,

    /// Records per listing page
    #[serde(default)]
    pub page_size: Option<u32>,

    /// User agent string
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        if self.page_size == Some(0) {
            return Err(Error::config("page_size must be greater than zero"));
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)?;
        }
        Ok(())
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder();
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Auth settings
    pub fn auth_config(&self) -> AuthConfig {
        let source = match (&self.api_key, &self.api_key_env) {
            (Some(key), _) => CredentialSource::key(key),
            (None, Some(var)) => CredentialSource::env(var),
            (None, None) => CredentialSource::default(),
        };
        AuthConfig {
            header_name: self
                .auth_header
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTH_HEADER.to_string()),
            source,
        }
    }

    /// Listing settings
    pub fn list_config(&self) -> ListConfig {
        let config = ListConfig::default();
        match self.page_size {
            Some(size) => config.page_size(size),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ClientConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());

        let http = config.http_config();
        assert_eq!(http.base_url, "http://localhost:8080");
        assert_eq!(http.timeout, Duration::from_secs(60));

        assert_eq!(config.auth_config(), AuthConfig::default());
        assert_eq!(config.list_config(), ListConfig::default());
    }

    #[test]
    fn test_full_config() {
        let yaml = r"
base_url: https://api.stagingeb.com
timeout_secs: 15
api_key_env: EB_KEY
auth_header: X-Api-Key
page_size: 20
user_agent: listings/2.0
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();

        let http = config.http_config();
        assert_eq!(http.base_url, "https://api.stagingeb.com");
        assert_eq!(http.timeout, Duration::from_secs(15));
        assert_eq!(http.user_agent, "listings/2.0");

        let auth = config.auth_config();
        assert_eq!(auth.header_name, "X-Api-Key");
        assert_eq!(auth.source, CredentialSource::env("EB_KEY"));

        assert_eq!(config.list_config().cursor.page_size, 20);
    }

    #[test]
    fn test_inline_key_wins_over_env() {
        let config =
            ClientConfig::from_yaml_str("api_key: abc\napi_key_env: IGNORED\n").unwrap();
        assert_eq!(config.auth_config().source, CredentialSource::key("abc"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ClientConfig::from_yaml_str("timeout_secs: 0").unwrap_err(),
            Error::Config { .. }
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("page_size: 0").unwrap_err(),
            Error::Config { .. }
        ));
        assert!(ClientConfig::from_yaml_str("base_url: not a url")
            .unwrap_err()
            .is_decode());
        assert!(matches!(
            ClientConfig::from_yaml_str("unknown_field: 1").unwrap_err(),
            Error::YamlParse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://127.0.0.1:9999").unwrap();
        writeln!(file, "page_size: 5").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:9999"));
        assert_eq!(config.page_size, Some(5));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load("/nonexistent/easybroker.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
