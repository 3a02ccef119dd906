//! Authentication module
//!
//! The EasyBroker API authenticates every request with a single API key sent
//! in a custom header. The key comes from a [`CredentialSource`], which is
//! either a fixed value or an environment variable read on every request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CredentialSource, DEFAULT_API_KEY_ENV, DEFAULT_AUTH_HEADER};

#[cfg(test)]
mod tests;
