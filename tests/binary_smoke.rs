// use macro form directly; no import needed
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::tempdir;

fn write_config(dir: &Path, sources: &[&Path], dest: &Path) -> PathBuf {
    let log = dir.join("triage.log");
    let mut body = String::from("<config>\n");
    for s in sources {
        body.push_str(&format!("  <source_dir>{}</source_dir>\n", s.display()));
    }
    body.push_str(&format!("  <destination>{}</destination>\n", dest.display()));
    body.push_str(&format!("  <log_file>{}</log_file>\n", log.display()));
    body.push_str("</config>\n");

    let path = dir.join("config.xml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn binary_help_lists_both_subcommands() {
    let me = assert_cmd::cargo::cargo_bin!("photo_triage");
    let out = Command::new(me).arg("--help").output().expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("dedupe"));
}

#[test]
fn binary_print_config_succeeds() {
    let me = assert_cmd::cargo::cargo_bin!("photo_triage");
    let out = Command::new(me)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("config"));
}

#[test]
fn binary_scan_prints_directory_report() {
    let td = tempdir().unwrap();
    let photos = td.path().join("photos");
    fs::create_dir_all(&photos).unwrap();
    fs::write(photos.join("pic.jpg"), vec![0u8; 1024]).unwrap();
    let cfg = write_config(td.path(), &[&photos], &td.path().join("quarantine"));

    let me = assert_cmd::cargo::cargo_bin!("photo_triage");
    let out = Command::new(me)
        .args(["--config", cfg.to_str().unwrap(), "scan"])
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Directory:"));
    assert!(stdout.contains("pic.jpg"));
    assert!(stdout.contains("1.00 KB"));
}

#[test]
fn binary_dedupe_end_to_end_prints_summary() {
    let td = tempdir().unwrap();
    let photos = td.path().join("photos");
    let dest = td.path().join("quarantine");
    fs::create_dir_all(&photos).unwrap();
    fs::write(photos.join("a.jpg"), "X").unwrap();
    fs::write(photos.join("b.jpg"), "X").unwrap();
    let cfg = write_config(td.path(), &[&photos], &dest);

    let me = assert_cmd::cargo::cargo_bin!("photo_triage");
    let out = Command::new(me)
        .args(["--config", cfg.to_str().unwrap(), "dedupe"])
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Duplicate found:"));
    assert!(stdout.contains("Duplicates found   : 1"));

    assert!(dest.join("b_doublon_1.jpg").exists());
    assert!(photos.join("a.jpg").exists());
}

#[test]
fn binary_dedupe_without_sources_fails_with_guidance() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        "<config>\n  <log_level>quiet</log_level>\n</config>\n",
    )
    .unwrap();

    let me = assert_cmd::cargo::cargo_bin!("photo_triage");
    let out = Command::new(me)
        .args(["--config", cfg_path.to_str().unwrap(), "dedupe"])
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no source directories"));
}
