use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::{ClientError, Request};
use crate::field::{FieldInput, FieldOutput, Protocol, is_zero};

use super::{API_VERSION, Prowlarr};

/// Input to add or update a Prowlarr indexer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexerInput {
    pub enable: bool,
    pub redirect: bool,
    pub priority: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub app_profile_id: i64,
    pub config_contract: String,
    pub implementation: String,
    pub name: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// A Prowlarr indexer as returned by the API.
///
/// Prowlarr indexers have no download client, so copying one into another
/// application's input keeps whatever download client the input already had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexerOutput {
    pub enable: bool,
    pub redirect: bool,
    pub supports_rss: bool,
    pub supports_search: bool,
    pub supports_redirect: bool,
    pub app_profile_id: i64,
    pub id: i64,
    pub priority: i64,
    pub sort_name: String,
    pub name: String,
    pub protocol: Protocol,
    pub privacy: String,
    pub definition_name: String,
    pub description: String,
    pub language: String,
    pub encoding: String,
    pub config_contract: String,
    pub implementation_name: String,
    pub implementation: String,
    pub info_link: String,
    pub indexer_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

impl Prowlarr {
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
