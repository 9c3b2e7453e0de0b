//! Config validation logic.
//! Checks the shape of the configuration before a run. Missing source
//! directories are NOT rejected here: the scanner and the mover skip them
//! per-run with a warning.

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::types::Config;

impl Config {
    /// Validate that the configuration can drive a run:
    /// - at least one source directory is configured,
    /// - a destination is set and is not a file,
    /// - the destination does not equal or nest inside any source directory
    ///   (a quarantine inside a scanned tree would be walked again).
    pub fn validate(&self) -> Result<()> {
        if self.source_dirs.is_empty() {
            bail!("no source directories configured; set <source_dir> in the config or pass paths on the command line");
        }
        if self.destination.as_os_str().is_empty() {
            bail!("no destination configured; set <destination> in the config or pass --dest");
        }
        if self.destination.exists() && !self.destination.is_dir() {
            bail!(
                "destination exists but isn't a directory: {}",
                self.destination.display()
            );
        }

        let dest_real = canonical_or_self(&self.destination);
        for src in &self.source_dirs {
            let src_real = canonical_or_self(src);
            if dest_real == src_real {
                bail!(
                    "destination and source resolve to the same path: '{}'",
                    dest_real.display()
                );
            }
            if dest_real.starts_with(&src_real) {
                bail!(
                    "destination '{}' must not be inside source '{}'",
                    dest_real.display(),
                    src_real.display()
                );
            }
        }

        info!(
            "Config validated: sources={} destination='{}'",
            self.source_dirs.len(),
            self.destination.display()
        );
        Ok(())
    }
}

/// Resolve symlinks when possible; fall back to the path as given.
fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
