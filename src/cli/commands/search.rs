//! One-off search command.

use tokio::runtime::Runtime;

use crate::aggregate::{Aggregator, SearchMode};
use crate::config::Config;

/// Run one search and print the JSON the endpoint would return.
///
/// Failures print `{"error": ...}` and exit with status 1.
pub fn cmd_search(
    rt: &Runtime,
    mut config: Config,
    query: &str,
    mode: Option<SearchMode>,
    no_placeholders: bool,
) -> anyhow::Result<()> {
    if let Some(mode) = mode {
        config.search.mode = mode;
    }
    if no_placeholders {
        config.search.placeholders = false;
    }

    let aggregator = Aggregator::from_config(&config)?;

    match rt.block_on(aggregator.search(query)) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            let body = serde_json::json!({ "error": e.to_string() });
            println!("{}", serde_json::to_string_pretty(&body)?);
            std::process::exit(1);
        }
    }
}
