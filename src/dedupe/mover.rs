//! Duplicate mover.
//! Walks every source tree, classifies each visited file against the
//! seen-hash table, and relocates repeats into the quarantine directory.
//!
//! Error policy: only failure to create the destination aborts the run, and
//! it happens before any file is touched. Every per-file failure (hash or
//! move) is logged, counted, and skipped.

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::TriageError;
use crate::output;
use crate::shutdown;
use crate::utils::io_error_with_help;

use super::hash::hash_file;
use super::stats::{RunStats, SeenHashes};

/// Run duplicate detection over `cfg.source_dirs`, moving repeats into
/// `cfg.destination`. Returns the counters accumulated over the run.
///
/// The seen-hash table is shared across all source directories, so a file in
/// the second directory counts as a duplicate of one in the first. A source
/// directory that does not exist is skipped with a warning.
pub fn detect_and_move(cfg: &Config) -> Result<RunStats> {
    if !cfg.dry_run {
        fs::create_dir_all(&cfg.destination)
            .map_err(io_error_with_help("create destination directory", &cfg.destination))?;
    } else {
        info!(action = "mkdir -p", path = %cfg.destination.display(), "dry-run");
    }

    let mut seen = SeenHashes::default();
    let mut stats = RunStats::default();

    'sources: for src in &cfg.source_dirs {
        if !src.exists() {
            let err = TriageError::PathNotFound(src.clone());
            warn!(code = err.code(), "Source directory skipped: {err}");
            continue;
        }

        info!("Scanning directory: {}", src.display());

        // Sorted traversal keeps first-occurrence selection deterministic
        // for files created in any order.
        for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
            if shutdown::is_requested() {
                let err = TriageError::Interrupted;
                warn!(code = err.code(), "{err}; stopping after current file");
                break 'sources;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    // A subtree we cannot enumerate contributes zero files,
                    // like a missing source directory.
                    warn!("Walk error under '{}': {}", src.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if !name_has_extension_separator(entry.file_name()) {
                debug!(path = %entry.path().display(), "skipped: name has no dot");
                continue;
            }

            process_file(cfg, entry.path(), &mut seen, &mut stats);
        }
    }

    info!(
        total_files = stats.total_files,
        duplicates = stats.duplicates,
        errors = stats.errors,
        distinct = seen.len(),
        "dedupe run finished"
    );
    Ok(stats)
}

/// Naming-pattern filter from the walk contract: visit only entries whose
/// name contains a dot. Not an extension whitelist.
fn name_has_extension_separator(name: &OsStr) -> bool {
    name.to_string_lossy().contains('.')
}

/// Hash one file and either register it or move it to quarantine.
/// Terminal states: registered, moved (counted as duplicate), error.
fn process_file(cfg: &Config, path: &Path, seen: &mut SeenHashes, stats: &mut RunStats) {
    stats.total_files += 1;

    let digest = match hash_file(path) {
        Ok(d) => d,
        Err(e) => {
            let err = TriageError::from_hash_io(path, e);
            stats.errors += 1;
            error!(code = err.code(), path = %path.display(), "{err}");
            return;
        }
    };

    let Some(original) = seen.check_or_register(digest, path) else {
        debug!(path = %path.display(), "registered first occurrence");
        return;
    };

    // The serial is committed only when the duplicate reaches a terminal
    // "moved" state, keeping total_files == registered + duplicates + errors.
    let serial = stats.duplicates + 1;
    let dest = cfg.destination.join(duplicate_file_name(path, serial));

    if cfg.dry_run {
        stats.duplicates = serial;
        info!(src = %path.display(), dest = %dest.display(), "dry-run: would move duplicate");
        report_duplicate(&original, path, &dest, true);
        return;
    }

    match move_duplicate(path, &dest) {
        Ok(()) => {
            stats.duplicates = serial;
            info!(src = %path.display(), dest = %dest.display(), "Moved duplicate");
            report_duplicate(&original, path, &dest, false);
        }
        Err(e) => {
            let err = TriageError::from_move_io(path, &dest, e);
            stats.errors += 1;
            error!(code = err.code(), path = %path.display(), "{err}");
        }
    }
}

/// Build `{stem}_doublon_{serial}{.ext}` from the duplicate's own name.
/// OsString assembly keeps non-UTF8 stems and extensions intact.
fn duplicate_file_name(path: &Path, serial: u64) -> OsString {
    let stem = path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("file"));
    let ext = path.extension().map(|e| e.to_os_string());

    let mut name = OsString::new();
    name.push(&stem);
    name.push(format!("_doublon_{serial}"));
    if let Some(e) = ext {
        name.push(".");
        name.push(e);
    }
    name
}

/// Relocate `src` to `dest`: atomic rename first, copy+remove when rename
/// fails (cross-filesystem moves).
fn move_duplicate(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(error = %e, src = %src.display(), "rename failed, falling back to copy+remove");
            fs::copy(src, dest)?;
            fs::remove_file(src)?;
            Ok(())
        }
    }
}

/// Console block mirroring the log event, for users following along.
fn report_duplicate(original: &Path, duplicate: &Path, dest: &Path, dry_run: bool) {
    output::print_user("Duplicate found:");
    output::print_user(&format!("  Original : {}", original.display()));
    output::print_user(&format!("  Duplicate: {}", duplicate.display()));
    if dry_run {
        output::print_user(&format!("  Would move to: {}", dest.display()));
    } else {
        output::print_user(&format!("  Moved to : {}", dest.display()));
    }
}
