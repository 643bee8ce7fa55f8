// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application configuration.
//!
//! Lookup order: an explicit `--config` path, then `$KISAN_MITRA_CONFIG`,
//! then `kisan-mitra.yaml` in the working directory, then built-in defaults.
//! Command-line flags are applied on top by the binary.

use crate::i18n::Lang;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "KISAN_MITRA_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "kisan-mitra.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: Lang,
    pub analysis_delay_ms: u64,
    pub listening_delay_ms: u64,
    pub recommendation_limit: usize,
    pub alert_limit: usize,
    pub nearby_market_limit: usize,
    pub common_pest_limit: usize,
    pub crop_calendar_limit: usize,
    pub seed: Option<u64>,
    /// JSON or YAML file replacing the built-in sample catalog.
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Lang::En,
            analysis_delay_ms: 3000,
            listening_delay_ms: 3000,
            recommendation_limit: 3,
            alert_limit: 2,
            nearby_market_limit: 4,
            common_pest_limit: 6,
            crop_calendar_limit: 3,
            seed: None,
            catalog: None,
        }
    }
}

impl AppConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn listening_delay(&self) -> Duration {
        Duration::from_millis(self.listening_delay_ms)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: AppConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
            _ => return Err(anyhow!("unsupported config extension for {}", path.display())),
        };
        // Catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(config)
    }

    /// Resolve the lookup order and load. `env_path` is the value of
    /// `$KISAN_MITRA_CONFIG`, passed in so callers and tests control it.
    pub fn discover(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        working_dir: &Path,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Flag(path.to_path_buf())));
        }
        if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::Env(path)));
        }
        let local = working_dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            match Self::load(&local) {
                Ok(config) => return Ok((config, ConfigSource::WorkingDir(local))),
                Err(err) => {
                    tracing::warn!(path = %local.display(), "ignoring unreadable config: {err:#}");
                }
            }
        }
        Ok((Self::default(), ConfigSource::Defaults))
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    WorkingDir(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Env(path) => write!(f, "{} (${})", path.display(), CONFIG_ENV),
            ConfigSource::WorkingDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}
