//! CLI command handlers.

mod copy_indexer;
mod grab;
mod search;

pub use copy_indexer::run_copy_indexer_command;
pub use grab::run_grab_command;
pub use search::run_search_command;

use starr::ClientConfig;

use crate::cli::ServerArgs;

fn client_config(server: &ServerArgs) -> ClientConfig {
    ClientConfig::new(server.url.as_str(), server.api_key.as_str())
        .with_timeouts(server.connect_timeout, server.timeout)
}
