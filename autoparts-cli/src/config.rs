//! Configuration file and environment handling.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file,
//! `AUTOPARTS_BASE_URL`, command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use autoparts_core::CatalogOptions;
use autoparts_provider::ApiConfig;

pub const APP_NAME: &str = "autoparts";
pub const BASE_URL_ENV: &str = "AUTOPARTS_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub api: ApiConfig,
    #[serde(flatten)]
    pub catalog: CatalogOptions,
}

impl Config {
    /// `<config dir>/autoparts/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join("config.json")
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse JSON config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies environment overrides read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Applies command-line overrides.
    pub fn apply_flags(&mut self, base_url: Option<&str>) {
        if let Some(url) = base_url {
            self.api.base_url = url.to_string();
        }
    }

    /// Loads the effective configuration for this run.
    pub fn resolve(path: Option<&Path>, base_url: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::load(&Self::default_path())?,
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_flags(base_url);
        config.api.validate().context("invalid configuration")?;
        Ok(config)
    }
}
