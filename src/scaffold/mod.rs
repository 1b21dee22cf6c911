//! Project skeleton generators
//!
//! A generator either creates the whole skeleton or stops early. Early stops
//! are reported as [`Outcome::Aborted`] and leave the filesystem untouched;
//! failures after validation are fatal and surface as [`ScaffoldError`].

pub mod go;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Mode requested for generated directories
pub const DIR_MODE: u32 = 0o755;

/// Mode requested for generated files
pub const FILE_MODE: u32 = 0o644;

/// Why a generator stopped before touching the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    EmptyPath,
    MissingDirectory(PathBuf),
    EmptyProjectName(PathBuf),
}

/// Result of a generator run that did not hit a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        root: PathBuf,
        project_name: String,
        directories: Vec<PathBuf>,
        files: Vec<PathBuf>,
    },
    Aborted(AbortReason),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::EmptyPath => write!(f, "no path given"),
            AbortReason::MissingDirectory(path) => {
                write!(f, "{} is not an existing directory", path.display())
            }
            AbortReason::EmptyProjectName(path) => {
                write!(f, "{} has no usable project name", path.display())
            }
        }
    }
}

/// Create a directory and any missing parents
///
/// New directories get [`DIR_MODE`] minus the umask. Existing ones are left
/// as they are.
pub(crate) fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| ScaffoldError::create_directory(path, e))
}

/// Write a generated file, truncating any previous content
///
/// A new file gets [`FILE_MODE`] minus the umask. An existing file keeps its
/// mode.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|e| ScaffoldError::write_file(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::write_file(path, e))
}
