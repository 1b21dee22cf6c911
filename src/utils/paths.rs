//! Path utilities for 3dots
//!
//! Normalizes the user supplied target path, derives the project name from it
//! and checks that the target directory is present before anything is written.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{is_separator, Component, Path, PathBuf};

use crate::utils::terminal::Logger;

/// The current directory marker once a trailing slash has been ensured
pub const CURRENT_DIR_MARKER: &str = "./";

fn is_current_dir_marker(path: &Path) -> bool {
    path.as_os_str() == CURRENT_DIR_MARKER
}

/// Append a trailing `/` unless the path is empty or already ends with a separator
pub fn ensure_trailing_slash(path: &Path) -> PathBuf {
    let mut out = OsString::from(path.as_os_str());
    match path.as_os_str().as_encoded_bytes().last() {
        None => {}
        Some(&last) if last.is_ascii() && is_separator(char::from(last)) => {}
        Some(_) => out.push("/"),
    }
    PathBuf::from(out)
}

/// Resolve a path (notably `./`) against the current working directory
///
/// The result is lexically cleaned: `.` components are dropped and `..`
/// removes the preceding component. Symlinks are not followed.
pub fn convert_from_dot_to_abs(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(clean(&joined))
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Derive the project name from the last segment of the target path
///
/// `./` and paths ending in `..` or a root are resolved against the working
/// directory first. Returns an empty string when resolution fails. Segments
/// that are not valid UTF-8 are converted lossily.
pub fn project_name_from_path(path: &Path, logger: &dyn Logger) -> String {
    let direct = if is_current_dir_marker(path) {
        None
    } else {
        base_name(path)
    };

    let name = match direct {
        Some(name) => name,
        None => match convert_from_dot_to_abs(path) {
            Ok(abs) => base_name(&abs).unwrap_or_default(),
            Err(e) => {
                logger.warn(&format!("Error converting to absolute path: {}", e));
                return String::new();
            }
        },
    };

    logger.debug(&format!("Directory name: {}", name));
    name
}

/// Report whether the target directory is missing
///
/// Returns `true` when the path cannot be resolved, cannot be stat'ed, or
/// names something other than a directory.
pub fn is_not_directory_exists(path: &Path, logger: &dyn Logger) -> bool {
    let target = if is_current_dir_marker(path) {
        match convert_from_dot_to_abs(path) {
            Ok(abs) => abs,
            Err(e) => {
                logger.debug(&format!("{}: {}", path.display(), e));
                return true;
            }
        }
    } else {
        path.to_path_buf()
    };

    match fs::metadata(&target) {
        Ok(metadata) if metadata.is_dir() => {
            logger.debug(&format!("{}: directory found", target.display()));
            false
        }
        Ok(_) => {
            logger.debug(&format!("{}: not a directory", target.display()));
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logger.debug(&format!("{}: not found", target.display()));
            true
        }
        Err(e) => {
            logger.debug(&format!("{}: {}", target.display(), e));
            true
        }
    }
}
