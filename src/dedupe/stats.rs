//! Run-scoped state: the seen-hash table and the counters.
//! Both are plain values owned by the caller of one run, so repeated runs
//! never leak state into each other.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

/// Counters accumulated over one dedupe run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Every file visited by the walk
    pub total_files: u64,
    /// Files classified as duplicates (and moved, unless dry-run)
    pub duplicates: u64,
    /// Files that failed to hash or move
    pub errors: u64,
}

impl RunStats {
    /// Files registered as first occurrences.
    /// Holds `total_files == registered() + duplicates + errors`.
    pub fn registered(&self) -> u64 {
        self.total_files - self.duplicates - self.errors
    }
}

/// Mapping from content digest to the first path seen with that content.
/// Grows monotonically during a run; entries are never removed.
#[derive(Debug, Default)]
pub struct SeenHashes {
    map: HashMap<String, PathBuf>,
}

impl SeenHashes {
    /// Look up `digest`; if unseen, register `path` as its first occurrence
    /// and return None. If already seen, return the first-seen path.
    pub fn check_or_register(&mut self, digest: String, path: &Path) -> Option<PathBuf> {
        match self.map.entry(digest) {
            Entry::Occupied(e) => Some(e.get().clone()),
            Entry::Vacant(v) => {
                v.insert(path.to_path_buf());
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
