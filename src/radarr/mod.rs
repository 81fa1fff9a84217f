//! Radarr (movies) records and endpoints.

mod indexer;
mod release;

pub use indexer::{IndexerInput, IndexerOutput};
pub use release::{Grab, Release};

use crate::client::{ArrClient, ClientConfig, ClientError};

/// Path prefix of the Radarr v3 API.
pub const API_VERSION: &str = "/api/v3";

/// Radarr API client.
#[derive(Debug, Clone)]
pub struct Radarr {
    client: ArrClient,
}

impl Radarr {
    /// Creates a client for the Radarr instance described by `config`.
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
