//! Shared helpers for path handling and terminal output

pub mod paths;
pub mod terminal;
