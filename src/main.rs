//! Songscope - a song search aggregator.
//!
//! Looks a free-text query up on Spotify, then enriches each match with
//! YouTube view counts, a Genius lyrics excerpt and related tracks. Runs as
//! an HTTP endpoint by default, or as a one-off CLI search.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod server;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset, blank or unparseable
const DEFAULT_LOG_DIRECTIVE: &str = "songscope=info";

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref()))
        .init();

    cli::run_command(&args)
}

/// Build the log filter from a `RUST_LOG` value, falling back to
/// [`DEFAULT_LOG_DIRECTIVE`]
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.filter(|s| !s.trim().is_empty()).map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        _ => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}
