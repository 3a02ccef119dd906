//! Endpoint descriptor
//!
//! Describes which resource a request targets and what it carries.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// A request target: resource path, optional id, query string and JSON body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    /// Path under the base URL (e.g. `v1/properties`)
    pub resource_path: String,
    /// Appended as an extra path segment when present
    pub resource_id: Option<String>,
    /// Appended verbatim after `?` when present
    pub query: Option<String>,
    /// JSON payload
    pub body: Option<Value>,
}

impl Endpoint {
    /// Create an endpoint for a resource path
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            ..Default::default()
        }
    }

    /// Target a single resource by id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.resource_id = (!id.is_empty()).then_some(id);
        self
    }

    /// Set a raw query string (without the leading `?`)
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    /// Set the query string from key/value pairs, form-encoded in order
    #[must_use]
    pub fn query_pairs<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        self.query(query)
    }

    /// Attach a serializable body.
    ///
    /// A body that fails to serialize is dropped and the request goes out
    /// without one.
    #[must_use]
    pub fn body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = match serde_json::to_value(body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(resource = %self.resource_path, error = %e, "Dropping request body that failed to serialize");
                None
            }
        };
        self
    }

    /// Attach an already-built JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Assemble the full URL against `base`
    pub fn url(&self, base: &str) -> Result<String> {
        let path = self.resource_path.trim_start_matches('/');
        if path.is_empty() {
            return Err(Error::config("endpoint resource path must not be empty"));
        }

        let mut url = format!("{}/{}", base.trim_end_matches('/'), path);
        if let Some(id) = &self.resource_id {
            url.push('/');
            url.push_str(id);
        }
        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }
        Ok(url)
    }
}
