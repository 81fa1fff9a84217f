//! Copy-indexer command handler: convert an exported indexer into another
//! application's indexer input.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use starr::{IndexerInput, IndexerSource, copy, copy_indexer, lidarr, prowlarr, radarr, readarr, sonarr};
use tracing::{debug, info};

use crate::cli::{App, CopyIndexerArgs};

pub fn run_copy_indexer_command(args: &CopyIndexerArgs) -> Result<()> {
    let raw = read_input(args)?;
    let output = convert(args, &raw)?;
    println!("{output}");
    Ok(())
}

fn read_input(args: &CopyIndexerArgs) -> Result<String> {
    if let Some(path) = &args.input {
        debug!(path = %path.display(), "Reading indexer from file");
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read indexer file {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read indexer from stdin")?;
    Ok(buffer)
}

fn convert(args: &CopyIndexerArgs, raw: &str) -> Result<String> {
    match args.from {
        App::Lidarr => convert_from::<lidarr::IndexerOutput>(args, raw),
        App::Prowlarr => convert_from::<prowlarr::IndexerOutput>(args, raw),
        App::Radarr => convert_from::<radarr::IndexerOutput>(args, raw),
        App::Readarr => convert_from::<readarr::IndexerOutput>(args, raw),
        App::Sonarr => convert_from::<sonarr::IndexerOutput>(args, raw),
    }
}

fn convert_from<S: IndexerSource>(args: &CopyIndexerArgs, raw: &str) -> Result<String> {
    let src: S = serde_json::from_str(raw)
        .with_context(|| format!("input is not a {:?} indexer record", args.from))?;

    match args.to {
        App::Lidarr => convert_into::<S, lidarr::IndexerInput>(args, &src),
        App::Prowlarr => convert_into::<S, prowlarr::IndexerInput>(args, &src),
        App::Radarr => convert_into::<S, radarr::IndexerInput>(args, &src),
        App::Readarr => convert_into::<S, readarr::IndexerInput>(args, &src),
        App::Sonarr => convert_into::<S, sonarr::IndexerInput>(args, &src),
    }
}

fn convert_into<S, D>(args: &CopyIndexerArgs, src: &S) -> Result<String>
where
    S: IndexerSource,
    D: IndexerInput + Default,
{
    let mut dst = D::default();
    copy_indexer(src, &mut dst, args.keep_tags)?;

    // Flags win over the source record. Keys the destination shape does not
    // have are ignored on decode.
    copy(&overrides(args), &mut dst).context("failed to apply destination flags")?;
    info!(
        from = ?args.from,
        to = ?args.to,
        keep_tags = args.keep_tags,
        "Indexer converted"
    );

    serde_json::to_string_pretty(&dst).context("failed to encode indexer")
}

fn overrides(args: &CopyIndexerArgs) -> Value {
    let mut overrides = Map::new();
    if args.enable_rss {
        overrides.insert("enableRss".to_string(), Value::Bool(true));
    }
    if args.enable_automatic_search {
        overrides.insert("enableAutomaticSearch".to_string(), Value::Bool(true));
    }
    if args.enable_interactive_search {
        overrides.insert("enableInteractiveSearch".to_string(), Value::Bool(true));
    }
    // Prowlarr has a single switch for all three.
    if args.enable_rss || args.enable_automatic_search || args.enable_interactive_search {
        overrides.insert("enable".to_string(), Value::Bool(true));
    }
    if let Some(id) = args.download_client_id {
        overrides.insert("downloadClientId".to_string(), Value::from(id));
    }
    Value::Object(overrides)
}
