//! Error types for API transport operations.
//!
//! Every request-scoped variant carries the rendered request (`METHOD uri?query`)
//! so callers can tell which endpoint call failed.

use thiserror::Error;

/// Maximum number of response body characters kept on an HTTP status error.
pub const MAX_BODY_PREVIEW: usize = 200;

/// Errors that can occur while talking to an application API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A configuration value is missing or out of range.
    #[error("invalid client configuration for `{field}`: {reason}")]
    Config {
        /// The offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client construction failed: {source}")]
    Build {
        /// The builder error.
        #[source]
        source: reqwest::Error,
    },

    /// The request path could not be joined onto the base URL.
    #[error("invalid endpoint URL for {request}: {reason}")]
    InvalidUrl {
        /// The request being built.
        request: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Network-level failure (DNS, connection refused, TLS, body read).
    #[error("network error calling {request}: {source}")]
    Network {
        /// The request that failed.
        request: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("timeout calling {request}")]
    Timeout {
        /// The request that timed out.
        request: String,
    },

    /// The API answered with a non-success status.
    #[error("HTTP {status} calling {request}: {body}")]
    HttpStatus {
        /// The request that was rejected.
        request: String,
        /// The HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid response from {request}: {source}")]
    Decode {
        /// The request whose response failed to decode.
        request: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded.
    #[error("encoding body for {request}: {source}")]
    Encode {
        /// The request whose body failed to encode.
        request: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Creates a `Config` error.
    #[must_use]
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a `Network` or `Timeout` error from a reqwest error.
    #[must_use]
    pub fn network(request: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                request: request.into(),
            }
        } else {
            Self::Network {
                request: request.into(),
                source,
            }
        }
    }

    /// Creates an `HttpStatus` error, keeping at most [`MAX_BODY_PREVIEW`] body characters.
    #[must_use]
    pub fn http_status(request: impl Into<String>, status: u16, body: &[u8]) -> Self {
        Self::HttpStatus {
            request: request.into(),
            status,
            body: String::from_utf8_lossy(body)
                .chars()
                .take(MAX_BODY_PREVIEW)
                .collect(),
        }
    }

    /// Creates a `Decode` error.
    #[must_use]
    pub fn decode(request: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            request: request.into(),
            source,
        }
    }

    /// Creates an `Encode` error.
    #[must_use]
    pub fn encode(request: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            request: request.into(),
            source,
        }
    }

    /// Returns the HTTP status for `HttpStatus` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true when the API rejected the API key (401/403).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ClientError::config("url", "must not be empty");
        let msg = err.to_string();
        assert!(msg.contains("`url`"), "should name the field: {msg}");
        assert!(msg.contains("must not be empty"), "should keep reason: {msg}");
    }

    #[test]
    fn test_http_status_truncates_body() {
        let body = "x".repeat(MAX_BODY_PREVIEW * 2);
        let err = ClientError::http_status("GET /api/v3/release", 500, body.as_bytes());
        match &err {
            ClientError::HttpStatus { body, status, .. } => {
                assert_eq!(body.len(), MAX_BODY_PREVIEW);
                assert_eq!(*status, 500);
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert!(err.to_string().starts_with("HTTP 500 calling GET /api/v3/release"));
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ClientError::http_status("GET /", 401, b"").is_unauthorized());
        assert!(ClientError::http_status("GET /", 403, b"").is_unauthorized());
        assert!(!ClientError::http_status("GET /", 404, b"").is_unauthorized());
        assert!(!ClientError::config("api_key", "empty").is_unauthorized());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let err = ClientError::decode("GET /api/v1/search", source);
        assert!(err.to_string().contains("GET /api/v1/search"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
