//! Terminal output utilities
//!
//! Log lines go through the [`Logger`] trait so the scaffolding pipeline never
//! touches a global; the binary hands it a [`TerminalLogger`].

use std::fmt;

use console::style;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warning",
            Level::Error => "error",
        };
        f.write_str(name)
    }
}

/// Leveled logging capability passed through the scaffolding steps
pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Logger writing styled lines to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalLogger {
    verbose: bool,
}

impl TerminalLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Logger for TerminalLogger {
    fn log(&self, level: Level, message: &str) {
        let tag = match level {
            Level::Debug if !self.verbose => return,
            Level::Debug => style(level).dim(),
            Level::Info => style(level).blue().bold(),
            Level::Warn => style(level).yellow().bold(),
            Level::Error => style(level).red().bold(),
        };
        eprintln!("{}: {}", tag, message);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}: {}", style("success").green().bold(), message);
}

/// Logger that keeps every line in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: std::cell::RefCell<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingLogger {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
