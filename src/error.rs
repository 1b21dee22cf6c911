//! Error types and helpers for user-friendly error messages
//!
//! Only the fatal tier lives here. Conditions that merely abort a run (empty
//! path, missing directory) are logged as warnings and never become errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal scaffolding failures
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A project directory could not be created
    #[error("Failed to create directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written
    #[error("Failed to write file {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    fn io_source(&self) -> &io::Error {
        match self {
            ScaffoldError::CreateDirectory { source, .. }
            | ScaffoldError::WriteFile { source, .. } => source,
        }
    }

    /// Actionable suggestion for the underlying I/O failure
    pub fn hint(&self) -> &'static str {
        match self.io_source().kind() {
            io::ErrorKind::PermissionDenied => hints::permission_denied(),
            io::ErrorKind::AlreadyExists => hints::already_exists(),
            _ => hints::partial_output(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}: {}", style("ERROR:").red().bold(), self, self.io_source());
        eprintln!("\n{} {}", style("HINT:").yellow().bold(), self.hint());
        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    pub fn permission_denied() -> &'static str {
        "The target directory is not writable by the current user.\n\
         Check its ownership and permissions, or pick another path."
    }

    pub fn already_exists() -> &'static str {
        "A file with the same name as a generated directory already exists.\n\
         Move it out of the way and run the generator again."
    }

    pub fn partial_output() -> &'static str {
        "Entries created before the failure were kept.\n\
         Remove them or re-run the generator once the problem is fixed."
    }
}
