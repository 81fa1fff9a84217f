//! Search command handler: query Prowlarr and print the results as JSON.

use anyhow::{Context, Result};
use starr::prowlarr::{Prowlarr, SearchInput};
use tracing::info;

use super::client_config;
use crate::cli::SearchArgs;

pub async fn run_search_command(args: &SearchArgs) -> Result<()> {
    let prowlarr = Prowlarr::new(&client_config(&args.server))?;

    let input = SearchInput {
        query: args.query.clone(),
        kind: args.kind.clone().unwrap_or_default(),
        indexer_ids: args.indexer_ids.clone(),
        categories: args.categories.clone(),
        limit: args.limit,
        offset: args.offset,
    };

    let results = prowlarr
        .search(&input)
        .await
        .with_context(|| format!("Prowlarr search for {:?} failed", args.query))?;

    info!(count = results.len(), "Search finished");
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
