//! HTTP endpoint command.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::server;

/// Serve the search endpoint until Ctrl-C
pub fn cmd_serve(rt: &Runtime, mut config: Config, bind: Option<SocketAddr>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    // Credentials are checked here, before the listener opens
    let aggregator = Aggregator::from_config(&config)?;
    let options = aggregator.options();
    tracing::info!(
        "Search mode {:?}, provider timeout {:?}, placeholders {:?}",
        options.mode,
        options.provider_timeout,
        options.placeholders
    );

    rt.block_on(server::serve(config.server.bind, Arc::new(aggregator)))?;
    Ok(())
}
