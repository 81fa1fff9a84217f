//! Indexer copy policy across applications.

use starr::field::{FieldOutput, FieldValue, Protocol};
use starr::{copy, copy_indexer, lidarr, prowlarr, radarr, readarr, sonarr};

fn search_indexer() -> prowlarr::IndexerOutput {
    prowlarr::IndexerOutput {
        id: 2,
        priority: 3,
        name: "yes".to_string(),
        protocol: Protocol::Usenet,
        implementation: "core".to_string(),
        config_contract: "hancock".to_string(),
        tags: vec![1, 2, 5],
        fields: vec![
            FieldOutput::new("One", "one"),
            FieldOutput::new("Two", 2.0),
            FieldOutput::new("Three", 3_u64),
            FieldOutput::new("Five", 5),
        ],
        ..Default::default()
    }
}

#[test]
fn test_keep_tags_resets_id_and_keeps_tags() {
    for src_id in [0, 1, 2, 9_999] {
        let src = prowlarr::IndexerOutput {
            id: src_id,
            ..search_indexer()
        };
        let mut dst = radarr::IndexerInput::default();

        copy_indexer(&src, &mut dst, true).unwrap();

        assert_eq!(dst.id, 0, "source id {src_id}");
        assert_eq!(dst.tags, src.tags);
    }
}

#[test]
fn test_drop_tags_empties_previously_populated_tags() {
    let mut dst = lidarr::IndexerInput {
        tags: vec![10, 11],
        ..Default::default()
    };

    copy_indexer(&search_indexer(), &mut dst, false).unwrap();

    assert!(dst.tags.is_empty());
    assert_eq!(dst.id, 0);
}

#[test]
fn test_series_indexer_copies_into_other_applications() {
    let src = sonarr::IndexerOutput {
        id: 8,
        name: "Sonarr side".to_string(),
        download_client_id: 3,
        tags: vec![4],
        ..Default::default()
    };
    let mut readarr_dst = readarr::IndexerInput::default();
    copy_indexer(&src, &mut readarr_dst, true).unwrap();
    assert_eq!(readarr_dst.download_client_id, 3);
    assert_eq!(readarr_dst.tags, vec![4]);

    let mut prowlarr_dst = prowlarr::IndexerInput::default();
    copy_indexer(&src, &mut prowlarr_dst, false).unwrap();
    assert_eq!(prowlarr_dst.name, "Sonarr side");
    assert!(prowlarr_dst.tags.is_empty());
}

#[test]
fn test_search_indexer_into_series_indexer_scenario() {
    let src = search_indexer();
    let mut dst = sonarr::IndexerInput {
        enable_automatic_search: true,
        enable_interactive_search: true,
        enable_rss: true,
        download_client_id: 15,
        ..Default::default()
    };

    copy(&src, &mut dst).unwrap();

    let expected: [(&str, FieldValue); 4] = [
        ("One", FieldValue::from("one")),
        ("Two", FieldValue::from(2.0)),
        ("Three", FieldValue::from(3_u64)),
        ("Five", FieldValue::from(5)),
    ];
    assert_eq!(dst.fields.len(), expected.len());
    for (field, (name, value)) in dst.fields.iter().zip(&expected) {
        assert_eq!(field.name, *name);
        assert!(field.value.numeric_eq(value), "{name}: {:?}", field.value);
    }
    assert!(dst.enable_automatic_search);
    assert!(dst.enable_interactive_search);
    assert!(dst.enable_rss);
    assert_eq!(dst.download_client_id, 15);
    assert_eq!(dst.tags, vec![1, 2, 5]);

    copy_indexer(&src, &mut dst, false).unwrap();

    assert!(dst.tags.is_empty());
    assert_eq!(dst.id, 0);
    assert_eq!(dst.priority, 3);
    assert_eq!(dst.name, "yes");
    assert_eq!(dst.protocol, Protocol::Usenet);
    assert_eq!(dst.implementation, "core");
    assert_eq!(dst.config_contract, "hancock");
    assert_eq!(dst.fields.len(), 4);
    assert_eq!(dst.download_client_id, 15);
    assert!(dst.enable_rss);
}
