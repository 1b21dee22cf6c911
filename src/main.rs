//! 3dots - a generator for development environment project structures
//!
//! ## Architecture
//!
//! ```text
//! cli → commands/go → scaffold/go → utils/paths + utils/terminal
//! ```
//!
//! Early stops (empty path, missing directory) are logged warnings and exit 0.
//! Filesystem failures after validation are fatal and exit 1.

mod cli;
mod commands;
mod error;
mod scaffold;
mod utils;

use clap::Parser;

use cli::Cli;
use error::ScaffoldError;
use utils::terminal::{Logger, TerminalLogger};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(err) = cli.execute() {
        match err.downcast_ref::<ScaffoldError>() {
            Some(scaffold_err) => scaffold_err.display_with_hints(),
            None => TerminalLogger::default().error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}
