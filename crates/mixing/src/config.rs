use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Share of the canceled white/black overlap taken off C, M and Y. An
/// empirical value, not derived from pigment physics.
pub const DEFAULT_GRAY_SATURATION_FACTOR: f32 = 0.3;

/// Always valid: both `new` and deserialization reject an out of range factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct MixingConfig {
    gray_saturation_factor: f32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    gray_saturation_factor: f32,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            gray_saturation_factor: DEFAULT_GRAY_SATURATION_FACTOR,
        }
    }
}

impl TryFrom<RawConfig> for MixingConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        MixingConfig::new(raw.gray_saturation_factor)
    }
}

impl Default for MixingConfig {
    fn default() -> Self {
        MixingConfig {
            gray_saturation_factor: DEFAULT_GRAY_SATURATION_FACTOR,
        }
    }
}

impl MixingConfig {
    pub fn new(gray_saturation_factor: f32) -> Result<Self, ConfigError> {
        let config = MixingConfig {
            gray_saturation_factor,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn gray_saturation_factor(&self) -> f32 {
        self.gray_saturation_factor
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.gray_saturation_factor;
        if !(0.0..=1.0).contains(&factor) {
            return Err(ConfigError::InvalidGrayFactor(factor));
        }
        Ok(())
    }

    /// Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("mixing config is not valid")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read mixing config {}", path.display()))?;
        MixingConfig::from_json(&json)
            .with_context(|| format!("could not load mixing config {}", path.display()))
    }
}
