// config.rs
//
// handles config.toml

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub color: ColorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Played when no targets are given on the command line
    pub playlist: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            playlist: None,
            log_dir: PathBuf::from("/tmp/playq"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#87ceeb".to_string(),
            secondary: "#5f8787".to_string(),
            tertiary: "#d8dee9".to_string(),
        }
    }
}

impl Config {
    /// Missing or broken configs fall back to the defaults since playq
    /// works fine without one.
    pub fn load() -> Self {
        match Self::read(&Self::path()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default config: {e:#}");
                Self::default()
            }
        }
    }

    fn path() -> PathBuf {
        let home = std::env::var_os("HOME").unwrap_or_default();
        PathBuf::from(home).join(".config/playq/config.toml")
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read {}", path.display()))?;
        let config = toml::from_str(&raw).context("Invalid config")?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
