//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::go::GoCommand;
use crate::utils::terminal::TerminalLogger;

/// A generator for development environment project structures
///
/// Creates the directories and helper files needed to start a project quickly.
#[derive(Parser, Debug)]
#[command(name = "3dots")]
#[command(version, about, long_about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "THREE_DOTS_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "THREE_DOTS_NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Golang project structure
    Go(GoCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let logger = TerminalLogger::new(self.verbose);

        match self.command {
            Some(Commands::Go(cmd)) => cmd.execute(&logger),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
