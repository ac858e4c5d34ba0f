//! CLI argument parsing for altpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use altpath_core::format::OutputFormat;
use parse::{parse_edge, parse_output_format};

/// Altpath - shortest alternating-color paths in two-colored directed graphs
#[derive(Parser, Debug)]
#[command(name = "altpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records [default: human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/altpath/config.toml)
    #[arg(long, global = true, env = "ALTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute distances for a graph document (JSON, TOML, or YAML; `-` reads JSON from stdin)
    Solve(SolveArgs),

    /// Compute distances for a graph given inline
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Graph document path
    pub file: PathBuf,

    /// Source vertex (overrides the document and config)
    #[arg(long, short, allow_negative_numbers = true)]
    pub source: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of vertices
    #[arg(long, short, allow_negative_numbers = true)]
    pub n: i64,

    /// Red edge as FROM:TO (can be specified multiple times)
    #[arg(long, short, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub red: Vec<[i64; 2]>,

    /// Blue edge as FROM:TO (can be specified multiple times)
    #[arg(long, short, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub blue: Vec<[i64; 2]>,

    /// Source vertex (overrides config)
    #[arg(long, short, allow_negative_numbers = true)]
    pub source: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "altpath", "--format", "json", "run", "-n", "3", "--red", "0:1", "--blue", "1:2",
            "--red", "1,2",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.n, 3);
                assert_eq!(args.red, vec![[0, 1], [1, 2]]);
                assert_eq!(args.blue, vec![[1, 2]]);
                assert_eq!(args.source, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_edge() {
        let err = Cli::try_parse_from(["altpath", "run", "-n", "3", "--red", "0-1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
