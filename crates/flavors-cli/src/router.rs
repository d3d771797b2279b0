// Command routing and dispatch

use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{Command, IngestCommand, SummaryCommand, VersionCommand};
use crate::error::CliResult;

/// cc-flavors - tally Claude Code flavor texts
#[derive(Parser, Debug)]
#[command(name = "cc-flavors")]
#[command(bin_name = "cc-flavors")]
#[command(about = "Count capitalized -ing flavor texts from stdin and report ranked totals")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read lines from stdin and store flavor counts
    #[command(about = "Read from stdin and store flavor counts")]
    Ingest {
        /// Database path (default: $XDG_DATA_HOME/cc-flavors/events.sqlite)
        #[arg(long, value_name = "PATH")]
        db: Option<String>,
    },

    /// Print aggregated flavor counts
    #[command(about = "Print aggregated flavor counts, highest first")]
    Summary {
        /// Database path (default: $XDG_DATA_HOME/cc-flavors/events.sqlite)
        #[arg(long, value_name = "PATH")]
        db: Option<String>,
    },

    /// Print version information
    #[command(about = "Print version information")]
    Version,
}

/// Parses arguments and dispatches to command handlers
pub struct CommandRouter;

impl CommandRouter {
    /// Parse `std::env::args`, initialize logging, and execute the selected
    /// command.
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();
        crate::logging::init_logging(cli.verbose, cli.quiet);
        Self::execute(&cli)
    }

    /// Execute a command
    pub fn execute(cli: &Cli) -> CliResult<()> {
        let command = match &cli.command {
            Some(command) => command,
            None => {
                // No subcommand given: show usage, exit cleanly.
                Cli::command().print_help()?;
                return Ok(());
            }
        };

        match command {
            Commands::Ingest { db } => IngestCommand::new(db.clone()).execute(),
            Commands::Summary { db } => SummaryCommand::new(db.clone()).execute(),
            Commands::Version => VersionCommand::new().execute(),
        }
    }
}
