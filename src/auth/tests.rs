//! Tests for the auth module

use super::*;
use reqwest::header::HeaderMap;

#[test]
fn test_default_config() {
    let config = AuthConfig::default();
    assert_eq!(config.header_name, "X-Authorization");
    assert_eq!(config.source, CredentialSource::env("API_KEY"));
}

#[test]
fn test_static_key_header() {
    let auth = Authenticator::new(AuthConfig::api_key("test-key-123"));
    let mut headers = HeaderMap::new();
    auth.apply(&mut headers).unwrap();

    assert_eq!(headers.get("X-Authorization").unwrap(), "test-key-123");
    assert!(headers.get("X-Authorization").unwrap().is_sensitive());
}

#[test]
fn test_custom_header_name() {
    let auth = Authenticator::new(AuthConfig::api_key("k").with_header("X-Api-Key"));
    let mut headers = HeaderMap::new();
    auth.apply(&mut headers).unwrap();

    assert_eq!(headers.get("X-Api-Key").unwrap(), "k");
    assert!(headers.get("X-Authorization").is_none());
}

#[test]
fn test_empty_static_key_is_auth_error() {
    let auth = Authenticator::new(AuthConfig::api_key(""));
    let err = auth.credential().unwrap_err();
    assert!(err.is_auth());
}

#[test]
fn test_env_key_is_reread() {
    let var = "EASYBROKER_AUTH_TEST_REREAD";
    let auth = Authenticator::new(AuthConfig::from_env(var));

    std::env::set_var(var, "first");
    assert_eq!(auth.credential().unwrap(), "first");

    std::env::set_var(var, "second");
    assert_eq!(auth.credential().unwrap(), "second");

    std::env::remove_var(var);
    let err = auth.credential().unwrap_err();
    assert!(err.is_auth());
    assert!(err.to_string().contains(var));
}

#[test]
fn test_missing_env_key_leaves_headers_untouched() {
    let auth = Authenticator::new(AuthConfig::from_env("EASYBROKER_AUTH_TEST_UNSET"));
    let mut headers = HeaderMap::new();

    assert!(auth.apply(&mut headers).unwrap_err().is_auth());
    assert!(headers.is_empty());
}

#[test]
fn test_debug_redacts_static_key() {
    let source = CredentialSource::key("super-secret");
    let rendered = format!("{source:?}");
    assert!(!rendered.contains("super-secret"));
}
