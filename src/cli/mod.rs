//! CLI module for csvapi
//!
//! Provides command-line interface for:
//! - serve: Load the CSV file and run the HTTP API
//! - columns: Print column names
//! - query: One-shot records query

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, QueryArgs, SourceArgs};
pub use commands::{columns, query, resolve_config, run, run_command, serve, ServeOverrides};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
