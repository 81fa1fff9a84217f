//! Prowlarr (indexer manager) records and endpoints.
//!
//! Prowlarr's search results can be grabbed through Prowlarr itself or,
//! by GUID and indexer id, through Sonarr and Radarr.

mod indexer;
mod search;

pub use indexer::{IndexerInput, IndexerOutput};
pub use search::{Category, Grab, Search, SearchInput};

use crate::client::{ArrClient, ClientConfig, ClientError};

/// Path prefix of the Prowlarr v1 API.
pub const API_VERSION: &str = "/api/v1";

/// Prowlarr API client.
#[derive(Debug, Clone)]
pub struct Prowlarr {
    client: ArrClient,
}

impl Prowlarr {
    /// Creates a client for the Prowlarr instance described by `config`.
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
