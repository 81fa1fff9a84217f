//! Lidarr (music) indexer records and endpoints.

mod indexer;

pub use indexer::{IndexerInput, IndexerOutput};

use crate::client::{ArrClient, ClientConfig, ClientError};

/// Path prefix of the Lidarr v1 API.
pub const API_VERSION: &str = "/api/v1";

/// Lidarr API client.
#[derive(Debug, Clone)]
pub struct Lidarr {
    client: ArrClient,
}

impl Lidarr {
    /// Creates a client for the Lidarr instance described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the config is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::from_client(ArrClient::new(config)?))
    }

    #[must_use]
    pub fn from_client(client: ArrClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ArrClient {
        &self.client
    }
}
