//! CLI argument definitions using clap
//!
//! Commands:
//! - csvapi serve [--config <path>] [--csv-file <path>] [--host <h>] [--port <p>]
//! - csvapi columns --csv-file <path>
//! - csvapi query --csv-file <path> [--page ..] [--sort-by ..] ...

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// csvapi - A read-only REST API over a CSV file
#[derive(Parser, Debug)]
#[command(name = "csvapi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the CSV file and serve the HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// CSV file to serve (overrides the config file)
        #[arg(long, env = "CSV_FILE_PATH")]
        csv_file: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Minimum log level: trace, info, warn, error, fatal
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Print the column names of a CSV file
    Columns {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run one records query and print the page
    Query {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Where the dataset comes from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// CSV file to load
    #[arg(long, env = "CSV_FILE_PATH")]
    pub csv_file: PathBuf,
}

/// Records query parameters, validated like the HTTP ones
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    #[arg(long)]
    pub page: Option<String>,

    #[arg(long)]
    pub page_size: Option<String>,

    #[arg(long)]
    pub sort_by: Option<String>,

    /// asc or desc
    #[arg(long)]
    pub sort_order: Option<String>,

    #[arg(long)]
    pub search: Option<String>,

    /// Filters in the form column:value,column2:value2
    #[arg(long)]
    pub filters: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
