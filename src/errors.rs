//! Typed error definitions for photo_triage.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Failed to hash {path}: {source}")]
    Hash { path: PathBuf, source: io::Error },

    #[error("Failed to move {from} -> {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl TriageError {
    /// Stable short code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            TriageError::PathNotFound(_) => "path_not_found",
            TriageError::NotADirectory(_) => "not_a_directory",
            TriageError::PermissionDenied { .. } => "permission_denied",
            TriageError::Hash { .. } => "hash_io_error",
            TriageError::Move { .. } => "move_io_error",
            TriageError::Interrupted => "interrupted",
        }
    }

    /// Classify an io::Error raised while hashing `path`.
    pub fn from_hash_io(path: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => TriageError::PathNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TriageError::PermissionDenied {
                path: path.to_path_buf(),
                context: "reading file for hashing".into(),
            },
            _ => TriageError::Hash {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Classify an io::Error raised while moving `from` to `to`.
    pub fn from_move_io(from: &std::path::Path, to: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => TriageError::PathNotFound(from.to_path_buf()),
            io::ErrorKind::PermissionDenied => TriageError::PermissionDenied {
                path: from.to_path_buf(),
                context: format!("moving to {}", to.display()),
            },
            _ => TriageError::Move {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            },
        }
    }
}
