//! Prowlarr search and grab.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{ClientError, Request};
use crate::field::{GrabRequest, Protocol};

use super::{API_VERSION, Prowlarr};

const DEFAULT_SEARCH_LIMIT: i64 = 100;
const DEFAULT_SEARCH_TYPE: &str = "search";

/// One result from the Prowlarr search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Search {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub guid: String,
    pub age: i64,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grabs: Option<i64>,
    pub indexer_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub indexer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_hash: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort_title: String,
    pub imdb_id: i64,
    pub tmdb_id: i64,
    pub tvdb_id: i64,
    pub tv_maze_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub download_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub poster_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub magnet_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeders: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leechers: Option<i64>,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_client_id: Option<i64>,
}

/// Indexer category attached to a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub sub_categories: Vec<Category>,
}

/// Parameters of a Prowlarr search. `query` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchInput {
    pub query: String,
    /// Search type; empty means `search`.
    #[serde(rename = "type")]
    pub kind: String,
    pub indexer_ids: Vec<i64>,
    pub categories: Vec<i64>,
    /// Result limit; anything below 1 means 100.
    pub limit: i64,
    /// Number of results to skip.
    pub offset: i64,
}

impl SearchInput {
    /// Creates input searching every indexer for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    fn to_request(&self) -> Request {
        let kind = if self.kind.is_empty() {
            DEFAULT_SEARCH_TYPE
        } else {
            self.kind.as_str()
        };
        let limit = if self.limit < 1 {
            DEFAULT_SEARCH_LIMIT
        } else {
            self.limit
        };

        Request::new(format!("{API_VERSION}/search"))
            .query("query", &self.query)
            .query("type", kind)
            .query("limit", limit)
            .query("offset", self.offset)
            .query_all("categories", &self.categories)
            .query_all("indexerIds", &self.indexer_ids)
    }
}

/// Output of the grab methods. Often only `guid` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grab {
    pub guid: String,
    pub age: i64,
    pub age_hours: f64,
    pub age_minutes: f64,
    pub size: i64,
    pub indexer_id: i64,
    pub imdb_id: i64,
    pub tmdb_id: i64,
    pub tvdb_id: i64,
    pub tv_maze_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    pub protocol: Protocol,
    pub file_name: String,
}

impl Prowlarr {
    /// Searches Prowlarr's indexers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip_all, fields(query = %input.query))]
    pub async fn search(&self, input: &SearchInput) -> Result<Vec<Search>, ClientError> {
        let req = input.to_request();
        let results: Vec<Search> = self.client.get_into(&req).await?;
        debug!(count = results.len(), "Prowlarr search finished");
        Ok(results)
    }

    /// Grabs a search result by GUID and indexer id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn grab(&self, guid: &str, indexer_id: i64) -> Result<Grab, ClientError> {
        let search = Search {
            guid: guid.to_string(),
            indexer_id,
            ..Search::default()
        };
        self.grab_search(&search).await
    }

    /// Grabs an item returned by [`Prowlarr::search`]. Only its GUID and
    /// indexer id are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[instrument(skip_all, fields(guid = %search.guid, indexer_id = search.indexer_id))]
    pub async fn grab_search(&self, search: &Search) -> Result<Grab, ClientError> {
        let req = Request::new(format!("{API_VERSION}/search")).json(&GrabRequest {
            guid: &search.guid,
            indexer_id: search.indexer_id,
        })?;
        self.client.post_into(&req).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_input_defaults() {
        let req = SearchInput::new("ubuntu").to_request();
        assert_eq!(req.query_value("type"), Some("search"));
        assert_eq!(req.query_value("limit"), Some("100"));
        assert_eq!(req.query_value("offset"), Some("0"));
        assert_eq!(req.query_value("categories"), None);
    }

    #[test]
    fn test_search_input_negative_limit_uses_default() {
        let input = SearchInput {
            limit: -5,
            ..SearchInput::new("x")
        };
        assert_eq!(input.to_request().query_value("limit"), Some("100"));
    }

    #[test]
    fn test_search_input_repeats_list_parameters() {
        let input = SearchInput {
            kind: "tvsearch".to_string(),
            indexer_ids: vec![1, 4],
            categories: vec![5000],
            limit: 20,
            offset: 40,
            ..SearchInput::new("the office")
        };
        assert_eq!(
            input.to_request().to_string(),
            "/api/v1/search?query=the+office&type=tvsearch&limit=20&offset=40&categories=5000&indexerIds=1&indexerIds=4"
        );
    }

    #[test]
    fn test_search_decodes_categories() {
        let search: Search = serde_json::from_value(serde_json::json!({
            "guid": "https://example.org/1",
            "indexerId": 2,
            "categories": [{"id": 2000, "name": "Movies", "subCategories": [{"id": 2040, "name": "Movies/HD"}]}],
            "grabs": 12,
            "protocol": "torrent"
        }))
        .unwrap();
        assert_eq!(search.categories[0].sub_categories[0].id, 2040);
        assert_eq!(search.grabs, Some(12));
        assert_eq!(search.protocol, Protocol::Torrent);
    }
}
