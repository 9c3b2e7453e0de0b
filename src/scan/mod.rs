//! Directory scanner: non-recursive listing and formatted reporting.
//!
//! Lists the direct file entries of each configured directory, sorted by
//! (modification time, name) so files sharing a timestamp order
//! deterministically. Pure reporting; nothing is mutated. The recursive walk
//! lives in `dedupe` — the asymmetry is intentional.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{error, info, warn};

use crate::errors::TriageError;
use crate::output;

/// One file observed during a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    /// File name as shown in the report.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Files of one scanned directory, in report order.
#[derive(Debug, Clone)]
pub struct DirListing {
    pub dir: PathBuf,
    pub files: Vec<FileEntry>,
}

/// Scan the given directories (non-recursive).
///
/// Paths that don't exist or aren't directories are skipped with a warning;
/// an enumeration error (permissions etc.) is logged and skips that
/// directory without aborting the scan. Listings keep the input order.
pub fn scan_directories(dirs: &[PathBuf]) -> Vec<DirListing> {
    let mut listings = Vec::new();

    for dir in dirs {
        if !dir.exists() {
            let err = TriageError::PathNotFound(dir.clone());
            warn!(code = err.code(), "{err}");
            continue;
        }
        if !dir.is_dir() {
            let err = TriageError::NotADirectory(dir.clone());
            warn!(code = err.code(), "{err}");
            continue;
        }

        match list_files(dir) {
            Ok(files) => {
                info!("Found {} files in '{}'", files.len(), dir.display());
                listings.push(DirListing {
                    dir: dir.clone(),
                    files,
                });
            }
            Err(e) => {
                error!("Failed to scan '{}': {}", dir.display(), e);
            }
        }
    }

    listings
}

/// Direct file entries of `dir`, sorted by (mtime, name).
fn list_files(dir: &Path) -> std::io::Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Follow symlinks, like the rest of the scanner's file-type checks.
        let meta = fs::metadata(&path)?;
        if !meta.is_file() {
            continue;
        }
        files.push(FileEntry {
            size: meta.len(),
            modified: meta.modified()?,
            path,
        });
    }

    files.sort_by(|a, b| {
        (a.modified, a.path.file_name().map(|n| n.to_os_string()))
            .cmp(&(b.modified, b.path.file_name().map(|n| n.to_os_string())))
    });
    Ok(files)
}

/// Print the scan report, one block per directory.
pub fn print_report(listings: &[DirListing]) {
    for listing in listings {
        output::print_user("");
        output::print_user(&format!("Directory: {}", listing.dir.display()));
        output::print_user(&"-".repeat(50));

        if listing.files.is_empty() {
            output::print_user("no files found");
            continue;
        }

        for file in &listing.files {
            let date: DateTime<Local> = file.modified.into();
            output::print_user(&format!(
                "{:<30} - Date: {} - Size: {:.2} KB",
                file.name(),
                date.format("%Y-%m-%d %H:%M:%S"),
                file.size as f64 / 1024.0
            ));
        }
    }
}
