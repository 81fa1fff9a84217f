//! Sonarr (TV series) records and endpoints.

mod indexer;
mod release;

pub use indexer::{IndexerInput, IndexerOutput};
pub use release::{Grab, Release, ReleaseEpisodeInfo, ReleaseSceneMapping, SearchRelease};

use crate::client::{ArrClient, ClientConfig, ClientError};

/// Path prefix of the Sonarr v3 API.
pub const API_VERSION: &str = "/api/v3";

/// Sonarr API client.
#[derive(Debug, Clone)]
pub struct Sonarr {
    client: ArrClient,
}

impl Sonarr {
    /// Creates a client for the Sonarr instance described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the config is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::from_client(ArrClient::new(config)?))
    }

    /// Wraps an existing transport client.
    #[must_use]
    pub fn from_client(client: ArrClient) -> Self {
        Self { client }
    }

    /// Returns the underlying transport client.
    #[must_use]
    pub fn client(&self) -> &ArrClient {
        &self.client
    }
}
