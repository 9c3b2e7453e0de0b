//! I/O helper utilities.
//!
//! `io_error_with_help` enriches an io::Error with the operation, the path,
//! and a short actionable hint derived from the OS error code, for use with
//! `map_err` in anyhow::Result code paths:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create dir", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => " — permission denied; check ownership and write permissions",
            libc::EXDEV => " — cross-filesystem; atomic rename not possible",
            libc::ENOENT => " — path not found; verify it exists",
            libc::ENOSPC => " — insufficient space on device",
            libc::EROFS => " — read-only filesystem; cannot write here",
            libc::ENAMETOOLONG => " — filename or path too long; shorten path segments",
            _ => "",
        };
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => " — permission denied; check ownership and write permissions",
        io::ErrorKind::NotFound => " — path not found; verify it exists",
        io::ErrorKind::AlreadyExists => " — already exists; remove or choose a unique name",
        _ => "",
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}{}", op, path.display(), e, hint_for(e));
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Returns a closure suitable for `.map_err(...)` converting io::Error into
/// an anyhow::Error carrying op/path context and a platform-aware hint.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
