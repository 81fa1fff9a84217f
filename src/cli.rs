//! CLI argument definitions using clap derive macros.

use std::fmt;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use starr::client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};

/// Typed clients and indexer copying for Lidarr, Prowlarr, Radarr, Readarr and Sonarr.
#[derive(Parser, Debug)]
#[command(name = "starr")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an indexer from one application's shape into another's
    CopyIndexer(CopyIndexerArgs),
    /// Search Prowlarr's indexers
    Search(SearchArgs),
    /// Send a Prowlarr search result to the download client
    Grab(GrabArgs),
}

/// Applications with indexer records.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum App {
    Lidarr,
    Prowlarr,
    Radarr,
    Readarr,
    Sonarr,
}

#[derive(ClapArgs, Debug)]
pub struct CopyIndexerArgs {
    /// Application the input indexer was exported from
    #[arg(long, value_enum, default_value_t = App::Prowlarr)]
    pub from: App,

    /// Application to build the indexer input for
    #[arg(long, value_enum)]
    pub to: App,

    /// Keep tag ids (only when both servers share the same tags)
    #[arg(long)]
    pub keep_tags: bool,

    /// Read the source indexer JSON from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Set enableRss on the result, overriding the source record
    #[arg(long)]
    pub enable_rss: bool,

    /// Set enableAutomaticSearch on the result, overriding the source record
    #[arg(long)]
    pub enable_automatic_search: bool,

    /// Set enableInteractiveSearch on the result, overriding the source record
    #[arg(long)]
    pub enable_interactive_search: bool,

    /// Set downloadClientId on the result, overriding the source record
    #[arg(long)]
    pub download_client_id: Option<i64>,
}

/// Connection settings shared by the API subcommands.
#[derive(ClapArgs)]
pub struct ServerArgs {
    /// Base URL of the Prowlarr instance
    #[arg(long, env = "STARR_URL")]
    pub url: String,

    /// API key of the Prowlarr instance
    #[arg(long, env = "STARR_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Connect timeout in seconds (1-3600)
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: u64,

    /// Request timeout in seconds (1-3600)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: u64,
}

impl fmt::Debug for ServerArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerArgs")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Search terms
    #[arg(long)]
    pub query: String,

    /// Search type (search, tvsearch, movie, music, book)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Maximum results (values below 1 use the server default of 100)
    #[arg(long, default_value_t = 100)]
    pub limit: i64,

    /// Results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// Restrict to an indexer id (repeatable)
    #[arg(long = "indexer-id")]
    pub indexer_ids: Vec<i64>,

    /// Restrict to a category id (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<i64>,
}

#[derive(ClapArgs, Debug)]
pub struct GrabArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// GUID of the search result
    #[arg(long)]
    pub guid: String,

    /// Indexer id of the search result
    #[arg(long)]
    pub indexer_id: i64,
}
