//! Configuration file support for the cleansing calculators.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/cleanse/config.toml`.
//! Every value has a built-in default, so the file is optional and may be partial.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dynamic: DynamicConfig,

    #[serde(default)]
    pub safety: SafetyThresholds,
}

/// Dynamic exercise constants
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DynamicConfig {
    /// Distance covered by one cleansing cycle
    #[serde(default = "default_distance_per_cycle_km")]
    pub distance_per_cycle_km: f64,

    /// Cycle count that counts as a full cleansing
    #[serde(default = "default_target_cycles")]
    pub target_cycles: u32,
}

impl Default for DynamicConfig {
    fn default() -> Self {
        Self {
            distance_per_cycle_km: default_distance_per_cycle_km(),
            target_cycles: default_target_cycles(),
        }
    }
}

/// Temperature band boundaries (°C) and maximum safe durations (minutes)
///
/// Bands are half-open:
/// `t <= extreme_cold_max`, `t <= very_cold_max`, `t < cold_below`,
/// `t < normal_below`, `t <= warm_max`, then hot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SafetyThresholds {
    #[serde(default = "default_extreme_cold_max")]
    pub extreme_cold_max: f64,
    #[serde(default = "default_very_cold_max")]
    pub very_cold_max: f64,
    #[serde(default = "default_cold_below")]
    pub cold_below: f64,
    #[serde(default = "default_normal_below")]
    pub normal_below: f64,
    #[serde(default = "default_warm_max")]
    pub warm_max: f64,

    #[serde(default)]
    pub max_safe_minutes: MaxSafeMinutes,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            extreme_cold_max: default_extreme_cold_max(),
            very_cold_max: default_very_cold_max(),
            cold_below: default_cold_below(),
            normal_below: default_normal_below(),
            warm_max: default_warm_max(),
            max_safe_minutes: MaxSafeMinutes::default(),
        }
    }
}

/// Maximum safe exposure per temperature band
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MaxSafeMinutes {
    #[serde(default = "default_extreme_cold_minutes")]
    pub extreme_cold: f64,
    #[serde(default = "default_very_cold_minutes")]
    pub very_cold: f64,
    #[serde(default = "default_cold_minutes")]
    pub cold: f64,
    #[serde(default = "default_normal_minutes")]
    pub normal: f64,
    #[serde(default = "default_warm_minutes")]
    pub warm: f64,
    #[serde(default = "default_hot_minutes")]
    pub hot: f64,
}

impl Default for MaxSafeMinutes {
    fn default() -> Self {
        Self {
            extreme_cold: default_extreme_cold_minutes(),
            very_cold: default_very_cold_minutes(),
            cold: default_cold_minutes(),
            normal: default_normal_minutes(),
            warm: default_warm_minutes(),
            hot: default_hot_minutes(),
        }
    }
}

// Default value functions
fn default_distance_per_cycle_km() -> f64 {
    4.0
}

fn default_target_cycles() -> u32 {
    5
}

fn default_extreme_cold_max() -> f64 {
    2.0
}

fn default_very_cold_max() -> f64 {
    10.0
}

fn default_cold_below() -> f64 {
    25.0
}

fn default_normal_below() -> f64 {
    30.0
}

fn default_warm_max() -> f64 {
    40.0
}

fn default_extreme_cold_minutes() -> f64 {
    2.0
}

fn default_very_cold_minutes() -> f64 {
    5.0
}

fn default_cold_minutes() -> f64 {
    30.0
}

fn default_normal_minutes() -> f64 {
    120.0
}

fn default_warm_minutes() -> f64 {
    60.0
}

fn default_hot_minutes() -> f64 {
    15.0
}

impl SafetyThresholds {
    /// Check that boundaries are finite and ascending, and durations positive
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("extreme_cold_max", self.extreme_cold_max),
            ("very_cold_max", self.very_cold_max),
            ("cold_below", self.cold_below),
            ("normal_below", self.normal_below),
            ("warm_max", self.warm_max),
        ];

        if let Some((name, _)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Config(format!("safety.{} must be finite", name)));
        }

        // Strictly ascending, otherwise a band would be empty
        if let Some(w) = bounds.windows(2).find(|w| w[1].1 <= w[0].1) {
            return Err(Error::Config(format!(
                "safety.{} ({}) must be greater than safety.{} ({})",
                w[1].0, w[1].1, w[0].0, w[0].1
            )));
        }

        let m = &self.max_safe_minutes;
        let minutes = [
            ("extreme_cold", m.extreme_cold),
            ("very_cold", m.very_cold),
            ("cold", m.cold),
            ("normal", m.normal),
            ("warm", m.warm),
            ("hot", m.hot),
        ];
        if let Some((name, value)) = minutes.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(Error::Config(format!(
                "safety.max_safe_minutes.{} must be positive, got {}",
                name, value
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("cleanse").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        let d = &self.dynamic;
        if !(d.distance_per_cycle_km.is_finite() && d.distance_per_cycle_km > 0.0) {
            return Err(Error::Config(format!(
                "dynamic.distance_per_cycle_km must be positive, got {}",
                d.distance_per_cycle_km
            )));
        }
        if d.target_cycles == 0 {
            return Err(Error::Config("dynamic.target_cycles must be at least 1".into()));
        }

        self.safety.validate()
    }
}
