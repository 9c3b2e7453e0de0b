//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template on first run (unless PHOTO_TRIAGE_CONFIG
//!   points somewhere explicit).
//!
//! This module only reads/writes the config file; path validation happens in
//! `config::validate`. Unknown XML fields are a hard error so typos surface
//! early instead of silently scanning the wrong directories.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::CONFIG_ENV;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    /// Repeated <source_dir> elements
    #[serde(rename = "source_dir", default)]
    source_dirs: Vec<String>,
    destination: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    dry_run: Option<bool>,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    cfg.source_dirs = parsed
        .source_dirs
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect();

    if let Some(dest) = parsed.destination.as_deref() {
        let trimmed = dest.trim();
        if !trimmed.is_empty() {
            cfg.destination = PathBuf::from(trimmed);
        }
    }

    if let Some(s) = parsed.log_level.as_deref()
        && let Some(level) = LogLevel::parse(s.trim())
    {
        cfg.log_level = level;
    }

    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg.dry_run = parsed.dry_run.unwrap_or(false);
    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the effective Config file, if any.
///
/// Search order:
/// - `$PHOTO_TRIAGE_CONFIG` (explicit; unreadable or malformed is an error)
/// - the OS default path (missing file is simply `Ok(None)`)
pub fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    if let Some(p) = explicit {
        return load_config_from_path(p).map(Some);
    }
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return load_config_from_path(Path::new(&p)).map(Some);
    }

    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_config_from_path(&path).map(Some)
}

/// Create the template config file and parent directory.
/// Refuses to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/photo_triage.log".into());

    let content = format!(
        "<!--\n  photo_triage configuration (XML)\n\n  Fields:\n    source_dir   -> directory to scan; repeat the element for several\n    destination  -> quarantine directory receiving moved duplicates\n    log_level    -> quiet | normal | info | debug\n    log_file     -> path to log file (optional; stdout is always used)\n    dry_run      -> true/false; report without moving anything\n\n  Notes:\n    - CLI flags override XML values.\n    - The destination must not be inside any source_dir.\n-->\n<config>\n  <source_dir>/path/to/photos1</source_dir>\n  <source_dir>/path/to/photos2</source_dir>\n  <destination>/path/to/duplicates</destination>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <dry_run>false</dry_run>\n</config>\n",
        suggested_log
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if PHOTO_TRIAGE_CONFIG is not set and no file
/// exists yet; returns the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}
