//! Response envelope validation.
//!
//! Every call against the service goes through [`request_data`], the only
//! place where error envelopes are recognized. The service reports logical
//! failures with a 200 status and one of two bodies:
//!
//! ```json
//! {"error": "Invalid login, please try again", "errorcode": "invalidlogin"}
//! {"exception": "moodle_exception", "errorcode": "invalidtoken", "message": "Invalid token"}
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use moodletree_core::Token;

use crate::error::FetchError;
use crate::transport::{Params, Transport};

/// Format parameter value for REST calls.
const REST_FORMAT: &str = "json";

/// Builds REST parameters: token, function, format, then `extra`.
///
/// Later entries in `extra` override the fixed keys.
pub fn api_params<I, K, V>(token: &Token, function: &str, extra: I) -> Params
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = Params::new();
    params.insert("wstoken".to_string(), token.as_str().to_string());
    params.insert("wsfunction".to_string(), function.to_string());
    params.insert("moodlewsrestformat".to_string(), REST_FORMAT.to_string());
    params.extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
    params
}

/// Performs a GET and validates the envelope.
///
/// # Errors
///
/// - [`FetchError::Transport`] if the request cannot complete
/// - [`FetchError::Service`] if the body is empty or carries an error field
#[instrument(skip(transport, params), fields(url = %url))]
pub async fn request_data(
    transport: &dyn Transport,
    url: &str,
    params: &Params,
) -> Result<Value, FetchError> {
    let body = transport.get(url, params).await?;

    if is_absent(&body) {
        warn!("Empty response body");
        return Err(FetchError::service("empty response"));
    }

    if let Some(err) = envelope_error(&body) {
        debug!(errorcode = ?err.errorcode(), "Service reported an error");
        return Err(err);
    }

    Ok(body)
}

/// Deserializes a validated body into `T`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidResponse`] naming `what` if the shape does not match.
pub fn parse_payload<T: DeserializeOwned>(body: Value, what: &str) -> Result<T, FetchError> {
    serde_json::from_value(body).map_err(|e| {
        warn!(error = %e, payload = what, "Unexpected payload shape");
        FetchError::InvalidResponse(format!("{what}: {e}"))
    })
}

fn is_absent(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn envelope_error(body: &Value) -> Option<FetchError> {
    let obj = body.as_object()?;

    let message = match (obj.get("error"), obj.get("exception")) {
        (Some(error), _) if is_set(error) => text_of(error),
        (_, Some(exception)) if is_set(exception) => obj
            .get("message")
            .filter(|m| is_set(m))
            .map_or_else(|| text_of(exception), text_of),
        _ => return None,
    };

    let errorcode = obj
        .get("errorcode")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(FetchError::Service { message, errorcode })
}

/// An error field counts only when it carries something: `null`, `false`,
/// `0` and `""` do not.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
