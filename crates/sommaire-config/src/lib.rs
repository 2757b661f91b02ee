use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Tuning for the viewport band in which a heading counts as active.
///
/// Mirrors the engine's `ViewportBand`; kept as plain numbers here so
/// the config crate stays dependency-free of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    #[serde(default = "BandConfig::default_top_fraction")]
    pub top_fraction: f32,
    #[serde(default = "BandConfig::default_bottom_fraction")]
    pub bottom_fraction: f32,
    #[serde(default = "BandConfig::default_thresholds")]
    pub thresholds: Vec<f32>,
}

impl BandConfig {
    fn default_top_fraction() -> f32 {
        0.2
    }

    fn default_bottom_fraction() -> f32 {
        0.7
    }

    fn default_thresholds() -> Vec<f32> {
        vec![0.1, 0.25, 0.5, 0.75]
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            top_fraction: Self::default_top_fraction(),
            bottom_fraction: Self::default_bottom_fraction(),
            thresholds: Self::default_thresholds(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub content_path: PathBuf,
    #[serde(default)]
    pub band: BandConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded content path
        config.content_path = Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sommaire");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
