//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! validates paths, and dispatches the requested subcommand.

use anyhow::{Result, bail};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::cli::{Args, Command};
use crate::config::{self, ensure_default_config_exists, load_config};
use crate::dedupe::{RunStats, detect_and_move};
use crate::logging::init_tracing;
use crate::output as out;
use crate::scan::{print_report, scan_directories};
use crate::shutdown;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    // Create a template config at the default location if none exists yet
    // (before logging init). Only guide-and-exit when the CLI didn't carry
    // enough to run without one.
    let created = if args.config.is_none() {
        ensure_default_config_exists()
    } else {
        None
    };

    let mut cfg = load_config(args.config.as_deref())?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    if let Some(path) = created
        && cfg.source_dirs.is_empty()
    {
        out::print_success(&format!(
            "A template photo_triage config was written to: {}",
            path.display()
        ));
        out::print_info(
            "Edit the file to set <source_dir> (repeatable), <destination> and optionally <log_level> and <log_file>, then re-run this command. To use a different location set PHOTO_TRIAGE_CONFIG.",
        );
        return Ok(());
    }

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt: Option<tracing_appender::non_blocking::WorkerGuard> =
        init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; shutting down gracefully...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting photo_triage: {:?}", args);

    // Main run (so we can drop the guard after)
    let result = (|| -> Result<()> {
        match &args.command {
            Some(Command::Scan { .. }) => {
                if cfg.source_dirs.is_empty() {
                    bail!(
                        "no directories to scan; pass DIR arguments or set <source_dir> in the config"
                    );
                }
                let listings = scan_directories(&cfg.source_dirs);
                print_report(&listings);
                info!(directories = listings.len(), "scan finished");
                Ok(())
            }
            Some(Command::Dedupe { .. }) => {
                cfg.validate()?;
                let stats = detect_and_move(&cfg)?;
                print_summary(&stats, cfg.dry_run);
                Ok(())
            }
            None => bail!("missing subcommand; see --help"),
        }
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location(args: &Args) {
    if let Some(p) = &args.config {
        out::print_info(&format!("Using --config (explicit):\n  {}", p.display()));
        return;
    }
    if let Ok(cfg_env) = std::env::var(config::CONFIG_ENV) {
        out::print_info(&format!(
            "Using {} (explicit):\n  {}\n",
            config::CONFIG_ENV,
            cfg_env
        ));
        out::print_info(&format!(
            "To override, unset {} or set it to another file.",
            config::CONFIG_ENV
        ));
        return;
    }
    match config::default_config_path() {
        Some(p) => {
            out::print_info(&format!(
                "Default photo_triage config path:\n  {}\n",
                p.display()
            ));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info(
                    "No config file exists there yet. Run without --print-config to create a template.",
                );
            }
        }
        None => {
            out::print_error("Could not determine a default config path.");
        }
    }
}

fn print_summary(stats: &RunStats, dry_run: bool) {
    out::print_user("");
    if dry_run {
        out::print_user("Summary (dry-run, nothing was moved):");
    } else {
        out::print_user("Summary:");
    }
    out::print_user(&format!("  Files analyzed     : {}", stats.total_files));
    out::print_user(&format!("  Duplicates found   : {}", stats.duplicates));
    out::print_user(&format!("  Errors encountered : {}", stats.errors));
}
