use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{HelixError, Result};
use crate::geometry::{SamplingConfig, Viewport};

/// Everything needed to build a scanner. Missing TOML sections fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub viewport: ViewportConfig,
    pub sampling: SamplingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ViewportConfig {
    pub fn build(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }
}

impl ScanConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| HelixError::ConfigParse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| HelixError::ConfigParse(e.to_string()))
    }

    /// Check every parameter without generating the spiral.
    pub fn validate(&self) -> Result<()> {
        self.viewport.build()?;
        self.sampling.validate()
    }
}
