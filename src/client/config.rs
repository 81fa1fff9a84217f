//! Connection settings for one application instance.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::ClientError;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one Lidarr/Prowlarr/Radarr/Readarr/Sonarr instance.
///
/// Deserializable so it can live in a config file next to other settings.
/// `Debug` never prints the API key.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL, including any URL base the app is served under
    /// (e.g. `http://localhost:8989/sonarr`).
    pub url: String,
    /// API key from the application's General settings.
    pub api_key: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Overrides the default User-Agent.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a config with default timeouts.
    #[must_use]
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Sets both timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect_timeout_secs: u64, timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_timeout_secs;
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validates values against client construction constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ClientError> {
        self.base_url()?;
        if self.api_key.trim().is_empty() {
            return Err(ClientError::config("api_key", "must not be empty"));
        }
        if self.api_key.chars().any(char::is_control) {
            return Err(ClientError::config(
                "api_key",
                "contains invalid control characters",
            ));
        }
        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("timeout_secs", self.timeout_secs)?;
        Ok(())
    }

    /// Parses the base URL, requiring an http(s) scheme and a host.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for empty, malformed or non-web URLs.
    pub fn base_url(&self) -> Result<Url, ClientError> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Err(ClientError::config("url", "must not be empty"));
        }
        let url = Url::parse(raw).map_err(|e| ClientError::config("url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::config(
                "url",
                format!("scheme '{}' is not supported; use http:// or https://", url.scheme()),
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ClientError::config("url", "URL has no host"));
        }
        Ok(url)
    }
}

fn validate_timeout_secs(field: &'static str, value: u64) -> Result<(), ClientError> {
    if !(1..=3600).contains(&value) {
        return Err(ClientError::config(
            field,
            format!("{value} is out of range; expected 1..=3600"),
        ));
    }
    Ok(())
}
