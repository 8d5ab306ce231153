//! CLI command implementations
//!
//! `serve` follows a fixed boot order: resolve configuration, load the
//! dataset, then start the HTTP server. A dataset that fails to load stops
//! the process before any socket is bound.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::args::{Command, QueryArgs, SourceArgs};
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::dataset::Dataset;
use crate::http_server::params::parse_records_params;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::query::QueryEngine;
use crate::schema::describe;

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub csv_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            csv_file,
            host,
            port,
            log_level,
        } => {
            let overrides = ServeOverrides {
                csv_file,
                host,
                port,
                log_level,
            };
            serve(config.as_deref(), overrides)
        }
        Command::Columns { source } => columns(&source),
        Command::Query { source, query: args } => query(&source, &args),
    }
}

/// Merge defaults, the optional config file and overrides, in that order
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ServeOverrides,
) -> CliResult<ServiceConfig> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(csv_file) = overrides.csv_file {
        config.csv_file_path = csv_file.to_string_lossy().into_owned();
    }
    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }

    config.validate()?;
    Ok(config)
}

/// Load the dataset and serve it over HTTP until ctrl-c
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = resolve_config(config_path, overrides)?;
    Logger::set_min_severity(config.severity()?);

    log_event(Event::StartupBegin);
    let addr = config.server.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("csv_file_path", config.csv_file_path.as_str()),
            ("addr", addr.as_str()),
        ],
    );

    let dataset = match Dataset::load(config.csv_path()) {
        Ok(dataset) => dataset,
        Err(e) => {
            let message = e.to_string();
            log_event_with_fields(
                Event::DatasetLoadFailed,
                &[("code", e.code()), ("error", message.as_str())],
            );
            return Err(e.into());
        }
    };

    let records = dataset.len().to_string();
    let columns = dataset.columns().len().to_string();
    log_event_with_fields(
        Event::DatasetLoaded,
        &[("records", records.as_str()), ("columns", columns.as_str())],
    );

    let server = HttpServer::with_config(config.server, Arc::new(dataset));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print the column names of a CSV file as a JSON array
pub fn columns(source: &SourceArgs) -> CliResult<()> {
    let dataset = Dataset::load(&source.csv_file)?;
    write_json(&describe(&dataset))
}

/// Run one records query and print the page as JSON
pub fn query(source: &SourceArgs, args: &QueryArgs) -> CliResult<()> {
    let spec = parse_records_params(&query_params(args))?;
    let dataset = Dataset::load(&source.csv_file)?;
    let page = QueryEngine::new(&dataset).query(&spec);
    write_json(&page)
}

/// Query arguments as the HTTP query-string map
fn query_params(args: &QueryArgs) -> HashMap<String, String> {
    let pairs = [
        ("page", &args.page),
        ("page_size", &args.page_size),
        ("sort_by", &args.sort_by),
        ("sort_order", &args.sort_order),
        ("search", &args.search),
        ("filters", &args.filters),
    ];

    pairs
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(None, ServeOverrides::default()).unwrap();
        assert_eq!(config.csv_file_path, "data.csv");
        assert_eq!(config.server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("csvapi.json");
        fs::write(&path, r#"{"csv_file_path": "file.csv", "port": 9000}"#).unwrap();

        let overrides = ServeOverrides {
            csv_file: Some(PathBuf::from("flag.csv")),
            ..Default::default()
        };
        let config = resolve_config(Some(&path), overrides).unwrap();

        assert_eq!(config.csv_file_path, "flag.csv");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_zero_port_override_rejected() {
        let overrides = ServeOverrides {
            port: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(None, overrides).is_err());
    }

    #[test]
    fn test_serve_fails_on_missing_dataset() {
        let temp = TempDir::new().unwrap();
        let overrides = ServeOverrides {
            csv_file: Some(temp.path().join("missing.csv")),
            log_level: Some("fatal".to_string()),
            ..Default::default()
        };

        let err = serve(None, overrides).unwrap_err();
        assert_eq!(err.code(), &crate::cli::CliErrorCode::LoadFailed);
    }

    #[test]
    fn test_query_params_skips_absent() {
        let args = QueryArgs {
            page: Some("2".to_string()),
            filters: Some("city:NYC".to_string()),
            ..Default::default()
        };
        let params = query_params(&args);

        assert_eq!(params.len(), 2);
        assert_eq!(params["page"], "2");
        assert_eq!(params["filters"], "city:NYC");
    }

    #[test]
    fn test_query_rejects_invalid_page() {
        let temp = TempDir::new().unwrap();
        let csv = temp.path().join("data.csv");
        fs::write(&csv, "name\nBob\n").unwrap();

        let source = SourceArgs { csv_file: csv };
        let args = QueryArgs {
            page: Some("0".to_string()),
            ..Default::default()
        };

        let err = query(&source, &args).unwrap_err();
        assert_eq!(err.code(), &crate::cli::CliErrorCode::InvalidArguments);
    }
}
