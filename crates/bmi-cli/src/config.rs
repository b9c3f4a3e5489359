//! Launch settings: optional TOML file merged under command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_DATABASE: &str = "bmiDB.db";
pub const DEFAULT_LOG_FILE: &str = "bmi.log";

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  /// SQLite file holding the history.
  pub database: Option<PathBuf>,
  /// `false` runs without a history store.
  pub history:  Option<bool>,
  pub log_file: Option<PathBuf>,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

// ─── Resolved settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub database: PathBuf,
  pub history:  bool,
  pub log_file: PathBuf,
}

impl Settings {
  /// Flags override the config file, which overrides defaults.
  pub fn resolve(
    file: ConfigFile,
    database: Option<PathBuf>,
    no_history: bool,
    log_file: Option<PathBuf>,
  ) -> Self {
    let database = database
      .or(file.database)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
    let log_file = log_file
      .or(file.log_file)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Self {
      database: expand_tilde(&database),
      history:  !no_history && file.history.unwrap_or(true),
      log_file: expand_tilde(&log_file),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_when_nothing_given() {
    let s = Settings::resolve(ConfigFile::default(), None, false, None);
    assert_eq!(s.database, PathBuf::from("bmiDB.db"));
    assert_eq!(s.log_file, PathBuf::from("bmi.log"));
    assert!(s.history);
  }

  #[test]
  fn flags_override_file() {
    let file: ConfigFile = toml::from_str(
      r#"
        database = "/var/lib/bmi/history.db"
        history = true
        log_file = "/tmp/bmi.log"
      "#,
    )
    .unwrap();

    let s = Settings::resolve(file, Some("other.db".into()), true, None);
    assert_eq!(s.database, PathBuf::from("other.db"));
    assert_eq!(s.log_file, PathBuf::from("/tmp/bmi.log"));
    assert!(!s.history);
  }

  #[test]
  fn file_can_disable_history() {
    let file: ConfigFile = toml::from_str("history = false").unwrap();
    let s = Settings::resolve(file, None, false, None);
    assert!(!s.history);
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<ConfigFile>("databse = \"x.db\"").is_err());
  }
}
