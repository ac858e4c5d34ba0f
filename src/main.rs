//! Altpath - shortest alternating-color paths CLI
//!
//! Reads a two-colored directed graph and prints, for every vertex, the
//! length of the shortest walk from the source whose edges alternate colors.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use altpath_core::error::{AltPathError, ExitCode as AltPathExitCode};
use altpath_core::format::OutputFormat;
use altpath_core::logging;
use cli::Cli;
use commands::dispatch::{self, CommandContext};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Until the config is read only the flag can ask for JSON errors
    let ctx = match CommandContext::load(&cli, start) {
        Ok(ctx) => ctx,
        Err(e) => return report(&e, OutputFormat::resolve(cli.format, None), cli.quiet),
    };

    match dispatch::run(&ctx) {
        Ok(()) => AltPathExitCode::Success.into(),
        Err(e) => report(&e, ctx.format, cli.quiet),
    }
}

/// Print a failed query in the resolved output format and pick its exit code
fn report(err: &AltPathError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format.wants_structured_errors() {
        eprintln!("{}", err.to_json());
    } else if !quiet {
        eprintln!("error: {err}");
    }
    err.exit_code().into()
}

/// Argument errors happen before `Cli` exists, so `--format json` is read
/// straight from argv. Help and version output stay with clap.
fn reject_arguments(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    let structured = format_in_argv(env::args()).is_some_and(OutputFormat::wants_structured_errors);
    if informational || !structured {
        err.exit();
    }

    let error = AltPathError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    error.exit_code().into()
}

/// The value of the first `--format` flag, if it names a known format
fn format_in_argv(args: impl IntoIterator<Item = String>) -> Option<OutputFormat> {
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_owned),
            None => continue,
        };
        return value.and_then(|v| v.parse().ok());
    }
    None
}
