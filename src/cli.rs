//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Precedence: CLI flags override config-file values, which override
//! defaults. `--debug` is a shorthand for `--log-level debug`.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// CLI wrapper for the photo_triage library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Scan photo folders and quarantine duplicate files (Rust)",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Explicit config file; overrides PHOTO_TRIAGE_CONFIG and the default path.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Write logs to this file in addition to stdout.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where photo_triage will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by photo_triage and exit"
    )]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the files of each directory, sorted by modification time.
    Scan {
        /// Directories to scan (default: the configured source dirs).
        #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
        dirs: Vec<PathBuf>,
    },
    /// Detect duplicate content and move repeats to the quarantine directory.
    Dedupe {
        /// Source directories to walk (default: the configured source dirs).
        #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
        sources: Vec<PathBuf>,

        /// Quarantine directory receiving moved duplicates (overrides config).
        #[arg(long, value_name = "PATH", value_hint = ValueHint::DirPath)]
        dest: Option<PathBuf>,

        /// Show what would be moved, but do not modify files.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }

        match &self.command {
            Some(Command::Scan { dirs }) => {
                if !dirs.is_empty() {
                    cfg.source_dirs = dirs.clone();
                }
            }
            Some(Command::Dedupe {
                sources,
                dest,
                dry_run,
            }) => {
                if !sources.is_empty() {
                    cfg.source_dirs = sources.clone();
                }
                if let Some(d) = dest {
                    cfg.destination = d.clone();
                }
                if *dry_run {
                    cfg.dry_run = true;
                }
            }
            None => {}
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
