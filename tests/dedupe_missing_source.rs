use std::fs;

use photo_triage::{Config, detect_and_move};
use tempfile::tempdir;

/// A source path that does not exist contributes zero files and raises no
/// error; the remaining directories are still processed.
#[test]
fn missing_source_is_skipped_without_error() {
    let temp = tempdir().unwrap();
    let present = temp.path().join("present");
    let absent = temp.path().join("never_created");
    let dest = temp.path().join("quarantine");
    fs::create_dir_all(&present).unwrap();

    fs::write(present.join("a.jpg"), "X").unwrap();
    fs::write(present.join("b.jpg"), "X").unwrap();

    let cfg = Config::new([&absent, &present], &dest);
    let stats = detect_and_move(&cfg).expect("missing source must not abort the run");

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.errors, 0);
}

/// All sources missing: the run completes with empty stats.
#[test]
fn all_sources_missing_yields_empty_stats() {
    let temp = tempdir().unwrap();
    let cfg = Config::new(
        [temp.path().join("ghost1"), temp.path().join("ghost2")],
        temp.path().join("quarantine"),
    );
    let stats = detect_and_move(&cfg).unwrap();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.duplicates, 0);
    assert_eq!(stats.errors, 0);
}
