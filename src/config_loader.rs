use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::constants::MAX_WASTAGE_PERCENT;
use crate::domain::enums::{Metal, Purity};
use crate::domain::model::input::QuoteForm;
use crate::engine::config::profile;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppInfo,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default = "default_gold")]
    pub gold: MetalSettings,

    #[serde(default = "default_silver")]
    pub silver: MetalSettings,
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where saved quotes are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

/// Per-metal form defaults
#[derive(Debug, Clone, Deserialize)]
pub struct MetalSettings {
    pub wastage_min_percent: u32,
    pub wastage_max_percent: u32,
    pub default_purity: Purity,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./saved_quotes.json")
}

fn settings_from_profile(metal: Metal) -> MetalSettings {
    let p = profile(metal);
    MetalSettings {
        wastage_min_percent: p.default_wastage.0,
        wastage_max_percent: p.default_wastage.1,
        default_purity: p.default_purity,
    }
}

fn default_gold() -> MetalSettings {
    settings_from_profile(Metal::Gold)
}

fn default_silver() -> MetalSettings {
    settings_from_profile(Metal::Silver)
}

impl Default for AppInfo {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: default_storage_path() }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppInfo::default(),
            storage: StorageConfig::default(),
            gold: default_gold(),
            silver: default_silver(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow!("Failed to load config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Saved quotes stored at {}", config.storage.path.display());

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_log_levels.contains(&self.app.log_level.to_lowercase().as_str()) {
            return Err(anyhow!(
                "Invalid log_level: {}. Must be one of: {:?}",
                self.app.log_level, valid_log_levels
            ));
        }

        for metal in Metal::ALL {
            let settings = self.metal(metal);
            if settings.wastage_min_percent > settings.wastage_max_percent {
                return Err(anyhow!(
                    "[{}] wastage_min_percent {} is above wastage_max_percent {}",
                    metal, settings.wastage_min_percent, settings.wastage_max_percent
                ));
            }
            if settings.wastage_max_percent > MAX_WASTAGE_PERCENT {
                return Err(anyhow!(
                    "[{}] wastage_max_percent {} is above {}",
                    metal, settings.wastage_max_percent, MAX_WASTAGE_PERCENT
                ));
            }
            if !profile(metal).supports(settings.default_purity) {
                return Err(anyhow!(
                    "[{}] default_purity {} is not offered for {}",
                    metal, settings.default_purity, metal
                ));
            }
        }

        Ok(())
    }

    /// Helper to get the settings for one metal
    pub fn metal(&self, metal: Metal) -> &MetalSettings {
        match metal {
            Metal::Gold => &self.gold,
            Metal::Silver => &self.silver,
        }
    }

    /// Blank form pre-filled from the configured defaults for `metal`
    pub fn default_form(&self, metal: Metal) -> QuoteForm {
        let settings = self.metal(metal);
        QuoteForm::new(
            "",
            "",
            settings.default_purity,
            settings.wastage_min_percent.to_string(),
            settings.wastage_max_percent.to_string(),
        )
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.app.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
