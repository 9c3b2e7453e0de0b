use std::fs;

use assert_fs::prelude::*;
use photo_triage::{Config, detect_and_move};

/// Canonical cross-directory scenario: dir A has `a.jpg` and `b.jpg` with the
/// same content, dir B has `c.jpg` with that content again. The first file
/// walked stays put; the other two land in the quarantine with counter
/// suffixes; stats add up.
#[test]
fn duplicates_across_directories_move_with_counter_names() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir_a = temp.child("A");
    let dir_b = temp.child("B");
    let dest = temp.child("quarantine");
    dir_a.create_dir_all().unwrap();
    dir_b.create_dir_all().unwrap();

    dir_a.child("a.jpg").write_str("X").unwrap();
    dir_a.child("b.jpg").write_str("X").unwrap();
    dir_b.child("c.jpg").write_str("X").unwrap();

    let cfg = Config::new([dir_a.path(), dir_b.path()], dest.path());
    let stats = detect_and_move(&cfg).expect("run should succeed");

    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.duplicates, 2);
    assert_eq!(stats.errors, 0);
    assert_eq!(stats.registered(), 1);

    // First occurrence is never moved or altered.
    assert!(dir_a.child("a.jpg").path().exists());
    assert_eq!(fs::read_to_string(dir_a.child("a.jpg").path()).unwrap(), "X");

    // Repeats were moved (not copied) under their suffixed names.
    assert!(!dir_a.child("b.jpg").path().exists());
    assert!(!dir_b.child("c.jpg").path().exists());
    assert!(dest.child("b_doublon_1.jpg").path().exists());
    assert!(dest.child("c_doublon_2.jpg").path().exists());
    assert_eq!(
        fs::read_to_string(dest.child("b_doublon_1.jpg").path()).unwrap(),
        "X"
    );
}

/// Distinct content is only ever registered, regardless of how many files
/// share an extension.
#[test]
fn unique_files_are_left_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("photos");
    let dest = temp.child("quarantine");
    src.create_dir_all().unwrap();

    src.child("one.jpg").write_str("first").unwrap();
    src.child("two.jpg").write_str("second").unwrap();
    src.child("three.png").write_str("third").unwrap();

    let cfg = Config::new([src.path()], dest.path());
    let stats = detect_and_move(&cfg).unwrap();

    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.duplicates, 0);
    assert_eq!(stats.errors, 0);
    assert!(src.child("one.jpg").path().exists());
    assert!(src.child("two.jpg").path().exists());
    assert!(src.child("three.png").path().exists());
}
