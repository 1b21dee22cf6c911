//! Go project command implementation

use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::scaffold::go::generate_go_project;
use crate::scaffold::Outcome;
use crate::utils::terminal::{print_success, Logger};

/// Generate a Golang project structure
#[derive(Args, Debug)]
pub struct GoCommand {
    /// Existing directory to lay the project out in (use `.` for the current one)
    pub path: OsString,
}

impl GoCommand {
    /// Execute the go command
    pub fn execute(self, logger: &dyn Logger) -> Result<()> {
        match generate_go_project(Path::new(&self.path), logger)? {
            Outcome::Created {
                root,
                project_name,
                directories,
                files,
            } => {
                print_success(&format!(
                    "Go project '{}' generated in {} ({} directories, {} files)",
                    project_name,
                    root.display(),
                    directories.len(),
                    files.len()
                ));
            }
            Outcome::Aborted(reason) => {
                logger.debug(&format!("Nothing generated: {}", reason));
            }
        }

        Ok(())
    }
}
