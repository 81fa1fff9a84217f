use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::{ClientError, Request};
use crate::field::{FieldInput, FieldOutput, Protocol, is_zero};

use super::{API_VERSION, Radarr};

/// Input to add or update a Radarr indexer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexerInput {
    pub enable_automatic_search: bool,
    pub enable_interactive_search: bool,
    pub enable_rss: bool,
    pub download_client_id: i64,
    pub priority: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub config_contract: String,
    pub implementation: String,
    pub name: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// A Radarr indexer as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexerOutput {
    pub enable_automatic_search: bool,
    pub enable_interactive_search: bool,
    pub enable_rss: bool,
    pub supports_rss: bool,
    pub supports_search: bool,
    pub download_client_id: i64,
    pub priority: i64,
    pub id: i64,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub name: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

impl Radarr {
    /// Returns every configured indexer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip(self))]
    pub async fn get_indexers(&self) -> Result<Vec<IndexerOutput>, ClientError> {
        self.client
            .get_into(&Request::new(format!("{API_VERSION}/indexer")))
            .await
    }

    /// Creates an indexer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the body cannot be encoded or the request fails.
    #[instrument(skip_all, fields(name = %indexer.name))]
    pub async fn add_indexer(&self, indexer: &IndexerInput) -> Result<IndexerOutput, ClientError> {
        let req = Request::new(format!("{API_VERSION}/indexer")).json(indexer)?;
        self.client.post_into(&req).await
    }
}
