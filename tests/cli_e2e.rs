//! End-to-end CLI tests for the starr binary.

#![allow(deprecated)]

mod support;
use support::socket_guard::start_mock_server_or_skip;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const PROWLARR_INDEXER: &str = r#"{
    "id": 2,
    "priority": 3,
    "name": "yes",
    "protocol": "usenet",
    "implementation": "core",
    "configContract": "hancock",
    "tags": [1, 2, 5],
    "fields": [
        {"name": "One", "value": "one"},
        {"name": "Two", "value": 2.0},
        {"name": "Three", "value": 3},
        {"name": "Five", "value": 5}
    ]
}"#;

fn starr() -> Command {
    let mut cmd = Command::cargo_bin("starr").unwrap();
    cmd.env_remove("STARR_URL")
        .env_remove("STARR_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_help_displays_usage() {
    starr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("copy-indexer"));
}

#[test]
fn test_binary_without_subcommand_fails() {
    starr().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_copy_indexer_from_file_prints_sanitized_input() {
    let mut file = NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, PROWLARR_INDEXER.as_bytes()).unwrap();

    let output = starr()
        .args(["copy-indexer", "--to", "sonarr", "--enable-rss", "--download-client-id", "15"])
        .arg("--input")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let copied: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(copied.get("id").is_none());
    assert_eq!(copied["tags"], json!([]));
    assert_eq!(copied["enableRss"], true);
    assert_eq!(copied["downloadClientId"], 15);
    assert_eq!(copied["priority"], 3);
    assert_eq!(copied["fields"][2], json!({"name": "Three", "value": 3}));
}

#[test]
fn test_copy_indexer_reads_stdin_and_keeps_tags() {
    let output = starr()
        .args(["copy-indexer", "--to", "radarr", "--keep-tags"])
        .write_stdin(PROWLARR_INDEXER)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let copied: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(copied["tags"], json!([1, 2, 5]));
    assert_eq!(copied["name"], "yes");
}

#[test]
fn test_copy_indexer_flags_override_source_record() {
    let radarr_indexer = json!({
        "id": 4,
        "name": "movies",
        "enableRss": false,
        "enableAutomaticSearch": true,
        "downloadClientId": 2
    });

    let output = starr()
        .args(["copy-indexer", "--from", "radarr", "--to", "sonarr"])
        .args(["--enable-rss", "--download-client-id", "15"])
        .write_stdin(radarr_indexer.to_string())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let copied: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(copied["enableRss"], true);
    assert_eq!(copied["downloadClientId"], 15);
    assert_eq!(copied["enableAutomaticSearch"], true);
    assert_eq!(copied["name"], "movies");
}

#[test]
fn test_copy_indexer_rejects_invalid_json() {
    starr()
        .args(["copy-indexer", "--to", "lidarr"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("indexer record"));
}

#[test]
fn test_search_requires_connection_settings() {
    starr()
        .args(["search", "--query", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[tokio::test]
async fn test_search_prints_results_as_json() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "ubuntu"))
        .and(query_param("indexerIds", "4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"guid": "g-1", "indexerId": 4, "title": "ubuntu.iso"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = starr()
        .env("STARR_URL", server.uri())
        .env("STARR_API_KEY", "key")
        .args(["search", "--query", "ubuntu", "--indexer-id", "4"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let results: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["guid"], "g-1");
    assert_eq!(results[0]["title"], "ubuntu.iso");
}

#[tokio::test]
async fn test_grab_reports_http_error() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .and(body_json(json!({"guid": "g-1", "indexerId": 4})))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    starr()
        .args(["grab", "--url", &server.uri(), "--api-key", "key"])
        .args(["--guid", "g-1", "--indexer-id", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}
