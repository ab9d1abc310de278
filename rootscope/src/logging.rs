//! Logging infrastructure for the rootscope library.
//!
//! Library code logs through the `log` facade: skipped layers, path-list
//! fallback and match decisions are all `log::debug!`. This module supplies
//! the stderr backend the CLI installs, with three verbosity levels.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_VAR: &str = "ROOTSCOPE_LOG_MODE";

/// How much the backend lets through, least verbose first.
///
/// # Examples
///
/// ```
/// use rootscope::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl LogLevel {
    /// The `log` crate filter equivalent to this level.
    #[must_use]
    pub const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Stderr backend for the `log` facade.
///
/// Records are written as `LEVEL: message`. Trace records are folded into
/// debug so `--verbose` shows per-root lookups as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger letting through records allowed by `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub fn allows(&self, level: log::Level) -> bool {
        let level = match level {
            log::Level::Trace => log::Level::Debug,
            other => other,
        };
        level <= self.level.to_level_filter()
    }

    /// The line written for a record, or `None` when it is filtered out.
    #[must_use]
    pub fn render(&self, level: log::Level, message: &fmt::Arguments<'_>) -> Option<String> {
        if !self.allows(level) {
            return None;
        }
        let tag = match level {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN",
            log::Level::Info => "INFO",
            log::Level::Debug | log::Level::Trace => "DEBUG",
        };
        Some(format!("{tag}: {message}"))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.allows(metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Some(line) = self.render(record.level(), record.args()) {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Resolves the log level and installs the stderr backend.
///
/// `verbose` beats `quiet`; either flag beats `ROOTSCOPE_LOG_MODE`, and an
/// unset or unparsable variable means [`LogLevel::Normal`].
///
/// Only the first call in a process installs a backend. Later calls still
/// return the logger they resolved.
///
/// # Examples
///
/// ```
/// use rootscope::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let logger = Logger::new(resolve_level(verbose, quiet));
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(logger.level().to_level_filter());
    }
    logger
}

fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    }
}
