//! Core configuration types.
//! - Config holds runtime settings; source/destination paths are always
//!   supplied explicitly (config file or CLI), never compiled in.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration shared by the scanner and the mover.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directories to scan / walk for duplicates
    pub source_dirs: Vec<PathBuf>,
    /// Quarantine directory that receives moved duplicates
    pub destination: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report actions but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dirs: Vec::new(),
            destination: PathBuf::new(),
            log_level: LogLevel::Normal,
            // default_log_path() is best-effort; None means stdout only
            log_file: paths::default_log_path(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config with explicit paths; other fields use defaults.
    pub fn new(
        source_dirs: impl IntoIterator<Item = impl Into<PathBuf>>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dirs: source_dirs.into_iter().map(Into::into).collect(),
            destination: destination.into(),
            ..Default::default()
        }
    }
}
