//! Command-line interface for songscope.
//!
//! Runs the HTTP endpoint (the default) or a one-off search that prints the
//! same JSON the endpoint would return.

mod commands;

pub use commands::{Cli, Commands, CredentialArgs, run_command};
