//! Radarr release search and grab.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{ClientError, Request};
use crate::field::{GrabRequest, Protocol, Quality, Value};

use super::{API_VERSION, Radarr};

/// A release returned by the Radarr release endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Release {
    pub id: i64,
    pub guid: String,
    pub quality: Quality,
    pub custom_format_score: i64,
    pub quality_weight: i64,
    pub age: i64,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub size: i64,
    pub indexer_id: i64,
    pub indexer: String,
    pub release_group: String,
    pub release_hash: String,
    pub title: String,
    pub scene_source: bool,
    pub movie_titles: Vec<String>,
    pub languages: Vec<Value>,
    pub approved: bool,
    pub temporarily_rejected: bool,
    pub rejected: bool,
    pub tmdb_id: i64,
    pub imdb_id: String,
    pub rejections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    pub comment_url: String,
    pub download_url: String,
    pub info_url: String,
    pub download_allowed: bool,
    pub release_weight: i64,
    pub edition: String,
    pub magnet_url: String,
    pub info_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeders: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leechers: Option<i64>,
    pub protocol: Protocol,
    pub indexer_flags: Vec<String>,
    pub movie_id: i64,
}

/// Output of the grab methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grab {
    pub approved: bool,
    pub download_allowed: bool,
    pub rejected: bool,
    pub scene_source: bool,
    pub temporarily_rejected: bool,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub age: i64,
    pub custom_format_score: i64,
    pub indexer_id: i64,
    pub quality_weight: i64,
    pub release_weight: i64,
    pub size: i64,
    pub tmdb_id: i64,
    pub imdb_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    pub guid: String,
    pub title: String,
    pub protocol: Protocol,
}

impl Radarr {
    /// Searches Radarr's indexers for releases of one movie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip(self))]
    pub async fn search_release(&self, movie_id: i64) -> Result<Vec<Release>, ClientError> {
        let req = Request::new(format!("{API_VERSION}/release")).query("movieId", movie_id);
        let releases: Vec<Release> = self.client.get_into(&req).await?;
        debug!(count = releases.len(), "Radarr release search finished");
        Ok(releases)
    }

    /// Grabs a cached search result by GUID and indexer id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip(self))]
    pub async fn grab(&self, guid: &str, indexer_id: i64) -> Result<Grab, ClientError> {
        let req =
            Request::new(format!("{API_VERSION}/release")).json(&GrabRequest { guid, indexer_id })?;
        self.client.post_into(&req).await
    }

    /// Grabs a release returned by [`Radarr::search_release`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn grab_release(&self, release: &Release) -> Result<Grab, ClientError> {
        self.grab(&release.guid, release.indexer_id).await
    }
}
