//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for calls against the Moodle service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered, but the payload reports a failure.
    #[error("Service error: {message}")]
    Service {
        /// Message from the error envelope.
        message: String,
        /// Machine-readable code, when the service sends one.
        errorcode: Option<String>,
    },

    /// The payload is a valid envelope but not the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Creates a service error without an error code.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
            errorcode: None,
        }
    }

    /// Returns true if the request itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the service reported a logical failure.
    ///
    /// Malformed payloads count as service failures too.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::InvalidResponse(_))
    }

    /// Returns the service error code, if any.
    pub fn errorcode(&self) -> Option<&str> {
        match self {
            Self::Service { errorcode, .. } => errorcode.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// Transport Error
// ============================================================================

/// Failure of the HTTP request itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS, or timeout failure.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status code.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL, without query parameters.
        url: String,
    },

    /// Body was not valid JSON.
    #[error("Could not decode response body: {0}")]
    Decode(String),
}

// ============================================================================
// Config Error
// ============================================================================

/// Error type for loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL cannot be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message() {
        let err = FetchError::service("invalid login");
        assert!(err.is_service());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Service error: invalid login");
        assert_eq!(err.errorcode(), None);
    }

    #[test]
    fn test_transport_error_converts() {
        let err: FetchError = TransportError::Status {
            status: 503,
            url: "http://moodle.example/login/token.php".to_string(),
        }
        .into();

        assert!(err.is_transport());
        assert!(!err.is_service());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_errorcode_exposed() {
        let err = FetchError::Service {
            message: "Invalid token - token not found".to_string(),
            errorcode: Some("invalidtoken".to_string()),
        };
        assert_eq!(err.errorcode(), Some("invalidtoken"));
    }
}
