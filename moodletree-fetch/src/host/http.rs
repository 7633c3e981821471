//! HTTP transport with tracing.
//!
//! Wraps a reqwest client configured from [`ServiceConfig`]:
//! - Request/response tracing, without query parameters
//! - Timeout and user agent from config
//! - Non-2xx and non-JSON bodies reported as [`TransportError`]

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ServiceConfig;
use crate::error::TransportError;
use crate::transport::{Params, Transport};

// ============================================================================
// HTTP Transport
// ============================================================================

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
}

impl HttpTransport {
    /// Creates a transport using the timeout and user agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built, which usually
    /// indicates a broken TLS configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { inner: client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, params), fields(url = %url))]
    async fn get(&self, url: &str, params: &Params) -> Result<Value, TransportError> {
        debug!("GET request");

        let response = self.inner.get(url).query(params).send().await?;
        let status = response.status();
        debug!(status = %status, "Response received");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}

/// Decodes a response body. An empty body decodes to `null`.
fn decode_body(body: &[u8]) -> Result<Value, TransportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, len = body.len(), "Response is not JSON");
        TransportError::Decode(e.to_string())
    })
}

// ============================================================================
// Tests
// ============================================================================
