//! Transport trait.
//!
//! The transport performs one HTTP GET with query parameters and returns the
//! decoded JSON body. It knows nothing about Moodle envelopes; those are
//! checked by [`crate::envelope::request_data`].

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::TransportError;

/// Flat query parameter map.
pub type Params = BTreeMap<String, String>;

/// HTTP GET returning a JSON body.
///
/// Implementations must not retry and must not log parameter values, which
/// carry passwords and tokens.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET request against `url` with `params` as the query string.
    async fn get(&self, url: &str, params: &Params) -> Result<Value, TransportError>;
}

