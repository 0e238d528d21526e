// Command-line definition
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// FieldKit operations CLI
#[derive(Parser, Debug)]
#[command(name = "fieldkit")]
#[command(about = "Sanitize CRM record fields and inspect workspace entity metadata")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (YAML)
    #[arg(short, long, global = true, env = "FIELDKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract fields from a JSON object and normalize their whitespace
    Sanitize(SanitizeArgs),

    /// Opportunity stakeholder records
    #[command(subcommand)]
    Stakeholder(StakeholderCommand),

    /// Workspace entity metadata
    #[command(subcommand)]
    Entity(EntityCommand),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Keys to extract (comma-separated). Falls back to the configured default keys
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Depth cap for nested values
    #[arg(long)]
    pub max_depth: Option<usize>,

    #[command(flatten)]
    pub io: IoArgs,
}

#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// JSON input file; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum StakeholderCommand {
    /// Normalize a stakeholder payload and print the result
    Normalize(IoArgs),
}

#[derive(Subcommand, Debug)]
pub enum EntityCommand {
    /// Print the opportunity stakeholder metadata
    Describe {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sanitize() {
        let cli = Cli::try_parse_from([
            "fieldkit", "sanitize", "--keys", "role,notes", "--max-depth", "3", "--pretty",
        ])
        .unwrap();

        match cli.command {
            Command::Sanitize(args) => {
                assert_eq!(args.keys, vec!["role", "notes"]);
                assert_eq!(args.max_depth, Some(3));
                assert!(args.io.pretty);
                assert!(args.io.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fieldkit", "entity", "describe", "--format", "yaml", "-v"])
            .unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Entity(EntityCommand::Describe {
                format: OutputFormat::Yaml
            })
        ));
    }

    #[test]
    fn test_parse_stakeholder_normalize() {
        let cli = Cli::try_parse_from(["fieldkit", "stakeholder", "normalize", "-i", "record.json"])
            .unwrap();

        match cli.command {
            Command::Stakeholder(StakeholderCommand::Normalize(io)) => {
                assert_eq!(io.input, Some(PathBuf::from("record.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_depth() {
        assert!(Cli::try_parse_from(["fieldkit", "sanitize", "--max-depth", "-1"]).is_err());
    }
}
