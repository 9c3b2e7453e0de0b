use std::fs;

use photo_triage::{Config, detect_and_move};
use tempfile::tempdir;

/// A per-file move failure is counted and skipped; the run continues and the
/// stats still balance (total == registered + duplicates + errors).
#[test]
fn failed_move_counts_as_error_and_run_continues() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("photos");
    let dest = temp.path().join("quarantine");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();

    fs::write(src.join("a.jpg"), "X").unwrap();
    fs::write(src.join("b.jpg"), "X").unwrap();
    fs::write(src.join("c.jpg"), "X").unwrap();

    // Occupy the first generated name with a directory: rename and the
    // copy fallback both fail, independent of process privileges.
    fs::create_dir(dest.join("b_doublon_1.jpg")).unwrap();

    let cfg = Config::new([&src], &dest);
    let stats = detect_and_move(&cfg).expect("per-file errors must not abort the run");

    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.errors, 1, "b.jpg failed to move");
    assert_eq!(stats.duplicates, 1, "c.jpg still moved");
    assert_eq!(stats.registered(), 1);

    // The failed file is left in place; the later duplicate reused the
    // freed serial.
    assert!(src.join("b.jpg").exists());
    assert!(dest.join("c_doublon_1.jpg").exists());
}
