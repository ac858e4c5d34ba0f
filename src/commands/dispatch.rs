//! Command dispatch logic for altpath

use std::io;
use std::time::Instant;

use altpath_core::config::Config;
use altpath_core::error::Result;
use altpath_core::format::OutputFormat;
use altpath_core::input::GraphInput;
use tracing::debug;

use crate::cli::{Cli, Commands, RunArgs, SolveArgs};
use crate::commands::solve;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        let format = OutputFormat::resolve(cli.format, config.format);
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Resolve the config file named by `--config` (or the default location)
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = Config::resolve(cli.config.as_deref())?;
        debug!(elapsed = ?start.elapsed(), format = ?config.format, "resolve_config");
        Ok(Self::new(cli, config, start))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("altpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest alternating-color paths in two-colored directed graphs.");
        println!();
        println!("Run `altpath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => execute_solve(ctx, args),
            Commands::Run(args) => execute_run(ctx, args),
        }
    }
}

fn execute_solve(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let input = if args.file.as_os_str() == "-" {
        GraphInput::from_reader(io::stdin().lock())?
    } else {
        GraphInput::load(&args.file)?
    };
    debug!(elapsed = ?ctx.start.elapsed(), "load_input");
    solve::execute(ctx, &input, args.source)
}

fn execute_run(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let input = GraphInput {
        n: args.n,
        red: args.red.clone(),
        blue: args.blue.clone(),
        source: None,
    };
    solve::execute(ctx, &input, args.source)
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}
