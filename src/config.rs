use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default cap on screenshots attached to a judge request.
pub const DEFAULT_MAX_IMAGES: i64 = 10;

fn default_max_images() -> i64 {
    DEFAULT_MAX_IMAGES
}

/// Assembly options recognized at the input boundary.
///
/// `max_images` is signed so a negative value read from a config file is
/// rejected by [`JudgeConfig::validate`], not by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "default_max_images")]
    pub max_images: i64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl JudgeConfig {
    pub fn new(max_images: i64) -> Self {
        Self { max_images }
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on malformed options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_images < 0 {
            return Err(ConfigError::Validation(format!(
                "max_images must be non-negative, got {}",
                self.max_images
            )));
        }
        Ok(())
    }

    /// Validated image cap as a slice-friendly count.
    #[must_use]
    pub fn max_images(&self) -> usize {
        usize::try_from(self.max_images).unwrap_or(0)
    }
}
