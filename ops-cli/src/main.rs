//! FieldKit operations CLI
//!
//! Usage:
//!   fieldkit sanitize --keys role,notes < record.json
//!   fieldkit stakeholder normalize --input stakeholder.json
//!   fieldkit entity describe --format yaml

use std::io;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use error_common::log_error;
use ops_cli::{run, Cli, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref()).map_err(|e| {
        log_error("config", &e);
        e
    })?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(e) = run(&cli.command, &config, stdin, stdout) {
        log_error("command", &e);
        return Err(e.into());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // stdout carries JSON output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,ops_cli={level},field_sanitizer={level},workspace_entity={level}"
            ))
        }))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
