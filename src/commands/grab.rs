//! Grab command handler.

use anyhow::{Context, Result};
use starr::prowlarr::Prowlarr;
use tracing::info;

use super::client_config;
use crate::cli::GrabArgs;

pub async fn run_grab_command(args: &GrabArgs) -> Result<()> {
    let prowlarr = Prowlarr::new(&client_config(&args.server))?;

    let grab = prowlarr
        .grab(&args.guid, args.indexer_id)
        .await
        .with_context(|| format!("Prowlarr grab of {} failed", args.guid))?;

    info!(guid = %grab.guid, indexer_id = args.indexer_id, "Release sent to download client");
    println!("{}", serde_json::to_string_pretty(&grab)?);
    Ok(())
}
