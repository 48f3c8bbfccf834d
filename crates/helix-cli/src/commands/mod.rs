pub mod batch;
pub mod config;
pub mod info;
pub mod scan;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use helix_core::scan::config::ScanConfig;

/// Scanner parameters shared by every command that builds a spiral.
#[derive(Args)]
pub struct ScanOptions {
    /// Scan config file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of angular samples along the spiral
    #[arg(long)]
    pub points: Option<usize>,

    /// Number of spiral turns
    #[arg(long)]
    pub rotations: Option<f64>,

    /// Radius growth exponent, in (0, 1]
    #[arg(long)]
    pub growth: Option<f64>,

    /// Maximum radius as a fraction of the smaller viewport side
    #[arg(long)]
    pub radius_scale: Option<f64>,
}

impl ScanOptions {
    pub fn resolve(&self) -> Result<ScanConfig> {
        let mut config = match self.config {
            Some(ref path) => ScanConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScanConfig::default(),
        };

        if let Some(w) = self.width {
            config.viewport.width = w;
        }
        if let Some(h) = self.height {
            config.viewport.height = h;
        }
        if let Some(n) = self.points {
            config.sampling.num_points = n;
        }
        if let Some(r) = self.rotations {
            config.sampling.rotations = r;
        }
        if let Some(g) = self.growth {
            config.sampling.growth_factor = g;
        }
        if let Some(s) = self.radius_scale {
            config.sampling.radius_scale = s;
        }

        config.validate().context("Invalid scan config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides(config: Option<PathBuf>) -> ScanOptions {
        ScanOptions {
            config,
            width: None,
            height: None,
            points: None,
            rotations: None,
            growth: None,
            radius_scale: None,
        }
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = no_overrides(None).resolve().unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(
            &path,
            "[viewport]\nwidth = 320\nheight = 240\n\n[sampling]\nnum_points = 500\nrotations = 4.0\n",
        )
        .unwrap();

        let from_file = no_overrides(Some(path.clone())).resolve().unwrap();
        assert_eq!(from_file.viewport.width, 320);
        assert_eq!(from_file.sampling.num_points, 500);

        let options = ScanOptions {
            width: Some(640),
            points: Some(50),
            ..no_overrides(Some(path))
        };
        let config = options.resolve().unwrap();

        assert_eq!(config.viewport.width, 640);
        assert_eq!(config.sampling.num_points, 50);
        // Values without a flag still come from the file.
        assert_eq!(config.viewport.height, 240);
        assert_eq!(config.sampling.rotations, 4.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let options = ScanOptions {
            growth: Some(0.0),
            ..no_overrides(None)
        };
        assert!(options.resolve().is_err());
    }
}
