use std::fs;

use photo_triage::{Config, detect_and_move};
use tempfile::tempdir;

/// The walk visits nested subdirectories but only files whose name contains
/// a dot; dotless names are invisible to the run even when their content
/// repeats.
#[test]
fn walk_is_recursive_and_dot_filtered() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("photos");
    let nested = src.join("2023").join("summer");
    let dest = temp.path().join("quarantine");
    fs::create_dir_all(&nested).unwrap();

    fs::write(src.join("a.jpg"), "X").unwrap();
    fs::write(nested.join("b.jpg"), "X").unwrap();
    // Same content, but no dot in the name: never visited, never counted.
    fs::write(src.join("README"), "X").unwrap();

    let cfg = Config::new([&src], &dest);
    let stats = detect_and_move(&cfg).unwrap();

    assert_eq!(stats.total_files, 2, "dotless names are not visited");
    assert_eq!(stats.duplicates, 1);
    assert!(src.join("README").exists());
    assert!(dest.join("b_doublon_1.jpg").exists());
}

/// Dot-prefixed names count as containing the separator; the suffix scheme
/// then has no extension to re-attach.
#[test]
fn hidden_files_are_visited() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("photos");
    let dest = temp.path().join("quarantine");
    fs::create_dir_all(&src).unwrap();

    fs::write(src.join(".envrc"), "X").unwrap();
    fs::write(src.join("copy.jpg"), "X").unwrap();

    let cfg = Config::new([&src], &dest);
    let stats = detect_and_move(&cfg).unwrap();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.duplicates, 1);
    // ".envrc" sorts before "copy.jpg", so the jpg is the duplicate.
    assert!(dest.join("copy_doublon_1.jpg").exists());
}
