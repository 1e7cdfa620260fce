//! Collector configuration stored in `collector.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "collector.toml";

/// Collector configuration (TOML).
///
/// Missing fields default to the values the person schema was designed for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectorConfig {
    /// Directory receiving the CSV file, relative to the working directory.
    pub output_dir: PathBuf,

    pub birth_year: YearRange,
}

/// Inclusive bounds for the year-of-birth field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct YearRange {
    pub min: i64,
    pub max: i64,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1900,
            max: 2025,
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("src"),
            birth_year: YearRange::default(),
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("output_dir must not be empty"));
        }
        if self.birth_year.min > self.birth_year.max {
            return Err(anyhow!(
                "birth_year.min ({}) must be <= birth_year.max ({})",
                self.birth_year.min,
                self.birth_year.max
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CollectorConfig::default()`.
pub fn load_config(path: &Path) -> Result<CollectorConfig> {
    if !path.exists() {
        let cfg = CollectorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CollectorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
