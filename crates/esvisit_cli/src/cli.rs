//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use esvisit_core::FallbackKind;

/// esvisit - Walk ESTree syntax trees stored as JSON
#[derive(Parser)]
#[command(name = "esvisit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Policy for node types missing from every key table (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub fallback: Option<FallbackArg>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the nodes of an ESTree JSON file by type
    Stats {
        /// Path to the JSON file
        file: PathBuf,

        /// Only count these node types (repeatable)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the child keys of a node type
    Keys {
        /// Node type name, e.g. `CallExpression`
        node_type: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FallbackArg {
    /// Fail on unknown node types
    Error,
    /// Visit every own field of unknown node types
    Iteration,
}

impl From<FallbackArg> for FallbackKind {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Error => FallbackKind::Error,
            FallbackArg::Iteration => FallbackKind::Iteration,
        }
    }
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
    fn test_parses_stats_with_types() {
        let cli = Cli::try_parse_from([
            "esvisit",
            "stats",
            "tree.json",
            "--type",
            "Identifier",
            "-t",
            "Literal",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Stats {
            file,
            types,
            format,
        } = cli.command
        else {
            panic!("Expected stats command");
        };
        assert_eq!(file, PathBuf::from("tree.json"));
        assert_eq!(types, vec!["Identifier", "Literal"]);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["esvisit", "keys", "Property", "--fallback", "iteration", "-v"])
                .unwrap();

        assert_eq!(cli.fallback, Some(FallbackArg::Iteration));
        assert!(cli.verbose);
        assert_eq!(
            FallbackKind::from(FallbackArg::Iteration),
            FallbackKind::Iteration
        );
    }

    #[test]
    fn test_rejects_unknown_fallback() {
        assert!(Cli::try_parse_from(["esvisit", "keys", "X", "--fallback", "skip"]).is_err());
    }
}
