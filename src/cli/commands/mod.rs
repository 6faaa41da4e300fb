//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP search endpoint
//! - `search`: Run one search and print the JSON result

mod search;
mod serve;

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::aggregate::SearchMode;
use crate::config::{self, Config, Credentials};

pub use search::cmd_search;
pub use serve::cmd_serve;

/// Songscope CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: songscope/config.toml in the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Provider credentials; each overrides the config file when set
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Spotify client ID
    #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true, global = true)]
    pub spotify_client_id: Option<String>,
    /// Spotify client secret
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub spotify_client_secret: Option<String>,
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    pub youtube_api_key: Option<String>,
    /// Genius client access token
    #[arg(long, env = "GENIUS_CLIENT_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub genius_access_token: Option<String>,
}

impl CredentialArgs {
    fn to_credentials(&self) -> Credentials {
        Credentials {
            spotify_client_id: self.spotify_client_id.clone(),
            spotify_client_secret: self.spotify_client_secret.clone(),
            youtube_api_key: self.youtube_api_key.clone(),
            genius_access_token: self.genius_access_token.clone(),
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search endpoint over HTTP (default)
    Serve {
        /// Listen address, overriding the config file
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Run a single search and print the result as JSON
    Search {
        /// Free-text song query
        query: String,
        /// Result shape, overriding the config file
        #[arg(short, long, value_enum)]
        mode: Option<SearchMode>,
        /// Leave genre, play count and chart position empty
        #[arg(long)]
        no_placeholders: bool,
    },
}

/// Run the specified CLI command, serving when none is given.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = resolve_config(cli)?;

    match &cli.command {
        Some(Commands::Serve { bind }) => cmd_serve(&rt, config, *bind),
        Some(Commands::Search {
            query,
            mode,
            no_placeholders,
        }) => cmd_search(&rt, config, query, *mode, *no_placeholders),
        None => cmd_serve(&rt, config, None),
    }
}

/// Load the config file and overlay credentials from flags/env.
///
/// An explicitly named file must parse; the default location falls back to
/// defaults.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::read(path)?,
        None => config::load(None),
    };
    config.credentials.merge(cli.credentials.to_credentials());
    tracing::debug!("Credentials: {:?}", config.credentials);
    Ok(config)
}
