//! Sonarr release search and grab.
//!
//! Searching asks Sonarr to query its indexers for one series, season or
//! episode. Grabbing sends a cached result (by GUID and indexer id) to the
//! download client; this also works with results found through Prowlarr.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{ClientError, Request};
use crate::field::{GrabRequest, Protocol, Quality, Value};

use super::{API_VERSION, Sonarr};

/// A release returned by the Sonarr release endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Release {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub guid: String,
    pub quality: Quality,
    pub quality_weight: i64,
    pub age: i64,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub size: i64,
    pub indexer_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub indexer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_hash: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub full_season: bool,
    pub scene_source: bool,
    pub season_number: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Value>,
    pub language_weight: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub air_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub series_title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub episode_numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub absolute_episode_numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_season_number: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapped_episode_numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapped_absolute_episode_numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_series_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapped_episode_info: Vec<ReleaseEpisodeInfo>,
    pub approved: bool,
    pub temporarily_rejected: bool,
    pub rejected: bool,
    pub tvdb_id: i64,
    pub tv_rage_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub download_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_url: String,
    pub episode_requested: bool,
    pub download_allowed: bool,
    pub release_weight: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_formats: Vec<serde_json::Value>,
    pub custom_format_score: i64,
    pub scene_mapping: ReleaseSceneMapping,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub magnet_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeders: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leechers: Option<i64>,
    pub protocol: Protocol,
    pub is_daily: bool,
    pub is_absolute_numbering: bool,
    pub is_possible_special_episode: bool,
    pub special: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub episode_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_client_id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub download_client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_override: Option<bool>,
}

/// Scene mapping attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseSceneMapping {
    pub title: String,
    pub season_number: i64,
    pub scene_season_number: i64,
    pub scene_origin: String,
    pub comment: String,
}

/// Episode a release was mapped to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseEpisodeInfo {
    pub id: i64,
    pub season_number: i64,
    pub episode_number: i64,
    pub absolute_episode_number: i64,
    pub title: String,
}

/// Input to search for releases through Sonarr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRelease {
    pub series_id: i64,
    pub episode_id: i64,
    pub season_number: i64,
}

impl SearchRelease {
    fn to_request(self) -> Request {
        Request::new(format!("{API_VERSION}/release"))
            .query("seriesId", self.series_id)
            .query("episodeId", self.episode_id)
            .query("seasonNumber", self.season_number)
    }
}

/// Output of the grab methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grab {
    pub approved: bool,
    pub download_allowed: bool,
    pub episode_requested: bool,
    pub full_season: bool,
    pub special: bool,
    pub temporarily_rejected: bool,
    pub is_absolute_numbering: bool,
    pub is_daily: bool,
    pub is_possible_special_episode: bool,
    pub rejected: bool,
    pub scene_source: bool,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub season_number: i64,
    pub size: i64,
    pub age: i64,
    pub custom_format_score: i64,
    pub indexer_flags: i64,
    pub indexer_id: i64,
    pub language_weight: i64,
    pub quality_weight: i64,
    pub release_weight: i64,
    pub tv_rage_id: i64,
    pub tvdb_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    pub guid: String,
    pub protocol: Protocol,
}

impl Sonarr {
    /// Searches for releases of a series, season or episode.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip(self))]
    pub async fn search_release(&self, input: &SearchRelease) -> Result<Vec<Release>, ClientError> {
        let req = input.to_request();
        let releases: Vec<Release> = self.client.get_into(&req).await?;
        debug!(count = releases.len(), "Sonarr release search finished");
        Ok(releases)
    }

    /// Grabs a cached search result by GUID and indexer id.
    ///
    /// Use this with Prowlarr search output.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn grab(&self, guid: &str, indexer_id: i64) -> Result<Grab, ClientError> {
        let release = Release {
            guid: guid.to_string(),
            indexer_id,
            ..Release::default()
        };
        self.grab_release(&release).await
    }

    /// Grabs a release returned by [`Sonarr::search_release`].
    ///
    /// Only the GUID and indexer id are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip_all, fields(guid = %release.guid, indexer_id = release.indexer_id))]
    pub async fn grab_release(&self, release: &Release) -> Result<Grab, ClientError> {
        let req = Request::new(format!("{API_VERSION}/release")).json(&GrabRequest {
            guid: &release.guid,
            indexer_id: release.indexer_id,
        })?;
        self.client.post_into(&req).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_release_query() {
        let req = SearchRelease {
            series_id: 12,
            episode_id: 0,
            season_number: 3,
        }
        .to_request();
        assert_eq!(
            req.to_string(),
            "/api/v3/release?seriesId=12&episodeId=0&seasonNumber=3"
        );
    }

    #[test]
    fn test_release_decodes_api_shape() {
        let release: Release = serde_json::from_value(serde_json::json!({
            "guid": "nzb-1",
            "indexerId": 4,
            "title": "Show.S01E01.1080p",
            "quality": {"quality": {"id": 7, "name": "Bluray-1080p"}, "revision": {"version": 1, "real": 0}},
            "episodeNumbers": [1],
            "publishDate": "2024-01-02T03:04:05Z",
            "protocol": "usenet",
            "sceneMapping": {"title": "Show", "seasonNumber": 1}
        }))
        .unwrap();
        assert_eq!(release.indexer_id, 4);
        assert_eq!(release.episode_numbers, vec![1]);
        assert_eq!(release.protocol, Protocol::Usenet);
        assert_eq!(release.quality.quality.unwrap().name, "Bluray-1080p");
        assert!(release.publish_date.is_some());
        assert_eq!(release.scene_mapping.season_number, 1);
    }
}
