//! Shared HTTP client construction policy for application clients.
//!
//! Centralizes timeout, user-agent, compression and authentication defaults
//! so every application client talks to its server the same way.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::user_agent;

use super::{ClientConfig, ClientError};

/// Header every *arr application reads the API key from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Builds the HTTP client for one application instance.
///
/// The API key is sent on every request as a sensitive default header.
///
/// # Errors
///
/// Returns [`ClientError::Config`] when the API key is not a valid header value,
/// or [`ClientError::Build`] when client construction fails.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client, ClientError> {
    let mut api_key = HeaderValue::from_str(config.api_key.trim())
        .map_err(|e| ClientError::config("api_key", e.to_string()))?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(user_agent::default_client_user_agent);

    debug!(
        connect_timeout_secs = config.connect_timeout_secs,
        timeout_secs = config.timeout_secs,
        %user_agent,
        "Building API HTTP client"
    );

    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(user_agent)
        .default_headers(headers)
        .gzip(true)
        .build()
        .map_err(|source| ClientError::Build { source })
}
