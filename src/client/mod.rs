//! HTTP transport shared by every application client.
//!
//! The per-application endpoint methods build a [`Request`], hand it to
//! [`ArrClient::get_into`] or [`ArrClient::post_into`], and return the decoded
//! record. Nothing in here knows about specific endpoints.
//!
//! # Example
//!
//! ```no_run
//! use starr::client::{ArrClient, ClientConfig, Request};
//! use starr::prowlarr::Search;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArrClient::new(&ClientConfig::new("http://localhost:9696", "api-key"))?;
//! let req = Request::new("/api/v1/search").query("query", "ubuntu");
//! let results: Vec<Search> = client.get_into(&req).await?;
//! println!("{} results", results.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod http_client;
mod request;

pub use config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, MAX_BODY_PREVIEW};
pub use http_client::API_KEY_HEADER;
pub use request::Request;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

/// Connection to one application instance.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ArrClient {
    http: Client,
    base_url: Url,
}

impl ArrClient {
    /// Validates `config` and builds a client for it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for invalid settings and
    /// [`ClientError::Build`] if the HTTP client cannot be constructed.
    #[instrument(skip_all, fields(url = %config.url))]
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let base_url = config.base_url()?;
        let http = http_client::build_http_client(config)?;
        Ok(Self { http, base_url })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request to its full URL, keeping any path prefix of the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the request path is not absolute.
    pub fn endpoint(&self, req: &Request) -> Result<Url, ClientError> {
        if !req.uri.starts_with('/') {
            return Err(ClientError::InvalidUrl {
                request: req.to_string(),
                reason: "request path must start with '/'".to_string(),
            });
        }

        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), req.uri);
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        if !req.query.is_empty() {
            url.query_pairs_mut().extend_pairs(req.query.iter());
        }
        Ok(url)
    }

    /// Sends a GET request and decodes the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status or
    /// a response that does not decode into `T`.
    pub async fn get_into<T: DeserializeOwned>(&self, req: &Request) -> Result<T, ClientError> {
        self.send_into(Method::GET, req).await
    }

    /// Sends a POST request with the request body and decodes the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// See [`ArrClient::get_into`].
    pub async fn post_into<T: DeserializeOwned>(&self, req: &Request) -> Result<T, ClientError> {
        self.send_into(Method::POST, req).await
    }

    #[instrument(skip(self, req), fields(request = %req))]
    async fn send_into<T: DeserializeOwned>(
        &self,
        method: Method,
        req: &Request,
    ) -> Result<T, ClientError> {
        let label = format!("{method} {req}");
        let url = self.endpoint(req)?;

        debug!(%url, "Calling API");

        let mut builder = self.http.request(method, url);
        if let Some(body) = &req.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ClientError::network(label.as_str(), source))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::network(label.as_str(), source))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "API returned an error status");
            return Err(ClientError::http_status(label, status.as_u16(), &bytes));
        }

        debug!(status = status.as_u16(), bytes = bytes.len(), "API call succeeded");
        serde_json::from_slice(&bytes).map_err(|source| ClientError::decode(label, source))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(url: &str) -> ArrClient {
        ArrClient::new(&ClientConfig::new(url, "key")).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = client("http://localhost:8989/sonarr/");
        let url = client
            .endpoint(&Request::new("/api/v3/release").query("seriesId", 4))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8989/sonarr/api/v3/release?seriesId=4"
        );
    }

    #[test]
    fn test_endpoint_without_query_has_no_question_mark() {
        let client = client("http://localhost:7878");
        let url = client.endpoint(&Request::new("/api/v3/indexer")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:7878/api/v3/indexer");
    }

    #[test]
    fn test_endpoint_rejects_relative_path() {
        let client = client("http://localhost:7878");
        let err = client.endpoint(&Request::new("api/v3/indexer")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = ArrClient::new(&ClientConfig::new("http://localhost:7878", "")).unwrap_err();
        assert!(matches!(err, ClientError::Config { field: "api_key", .. }));
    }
}
