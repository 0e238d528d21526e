// Command implementations
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use clap::CommandFactory;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use error_common::{FieldKitError, Result};
use field_sanitizer::{extract_and_sanitize_value, SanitizeOptions};
use workspace_entity::{opportunity_stakeholder, OpportunityStakeholderInput};

use crate::cli::{
    Cli, Command, EntityCommand, IoArgs, OutputFormat, SanitizeArgs, StakeholderCommand,
};
use crate::config::CliConfig;
use crate::BINARY_NAME;

/// Dispatch a parsed command. `stdin` is read only when no input file is given.
pub fn run<R: Read, W: Write>(
    command: &Command,
    config: &CliConfig,
    stdin: R,
    out: W,
) -> Result<()> {
    match command {
        Command::Sanitize(args) => sanitize(args, config, stdin, out),
        Command::Stakeholder(StakeholderCommand::Normalize(io)) => {
            normalize_stakeholder(io, stdin, out)
        }
        Command::Entity(EntityCommand::Describe { format }) => describe_entity(*format, out),
        Command::Completions { shell } => {
            let mut out = out;
            clap_complete::generate(*shell, &mut Cli::command(), BINARY_NAME, &mut out);
            Ok(())
        }
    }
}

pub fn sanitize<R: Read, W: Write>(
    args: &SanitizeArgs,
    config: &CliConfig,
    stdin: R,
    out: W,
) -> Result<()> {
    let keys = if args.keys.is_empty() {
        &config.sanitizer.default_keys
    } else {
        &args.keys
    };
    if keys.is_empty() {
        return Err(FieldKitError::InvalidInput(
            "no keys to extract; pass --keys or set FIELDKIT_DEFAULT_KEYS".to_string(),
        ));
    }

    let options = match args.max_depth {
        Some(depth) => SanitizeOptions::new(depth),
        None => config.sanitizer.options(),
    };

    let root = read_json(args.io.input.as_deref(), stdin)?;
    let fields = extract_and_sanitize_value(&root, keys.as_slice(), options)?;

    info!(
        requested = keys.len(),
        extracted = fields.len(),
        strings_normalized = fields.stats().strings_normalized,
        truncated_values = fields.stats().truncated_values,
        "Sanitized input"
    );

    write_json(&fields, args.io.pretty, out)
}

pub fn normalize_stakeholder<R: Read, W: Write>(io: &IoArgs, stdin: R, out: W) -> Result<()> {
    let payload = read_json(io.input.as_deref(), stdin)?;
    let input = OpportunityStakeholderInput::from_value(&payload)?;

    info!(opportunity_id = %input.opportunity_id, "Normalized stakeholder record");

    write_json(&input, io.pretty, out)
}

pub fn describe_entity<W: Write>(format: OutputFormat, mut out: W) -> Result<()> {
    let metadata = opportunity_stakeholder();
    match format {
        OutputFormat::Json => write_json(&metadata, true, out),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&metadata)?;
            out.write_all(yaml.as_bytes())?;
            Ok(())
        }
    }
}

fn read_json<R: Read>(path: Option<&Path>, stdin: R) -> Result<Value> {
    let value = match path {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => serde_json::from_reader(stdin)?,
    };
    Ok(value)
}

fn write_json<T: Serialize, W: Write>(value: &T, pretty: bool, mut out: W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
