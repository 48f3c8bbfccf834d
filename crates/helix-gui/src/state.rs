use std::path::PathBuf;
use std::sync::Arc;

use helix_core::geometry::{SamplingConfig, SpiralPath};
use helix_core::scan::config::{ScanConfig, ViewportConfig};
use helix_core::scan::ScanResult;

/// Editable scan parameters shown in the controls panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigState {
    pub width: u32,
    pub height: u32,
    pub num_points: usize,
    pub rotations: f64,
    pub growth_factor: f64,
    pub radius_scale: f64,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_scan_config(&ScanConfig::default())
    }
}

impl ConfigState {
    pub fn from_scan_config(config: &ScanConfig) -> Self {
        Self {
            width: config.viewport.width,
            height: config.viewport.height,
            num_points: config.sampling.num_points,
            rotations: config.sampling.rotations,
            growth_factor: config.sampling.growth_factor,
            radius_scale: config.sampling.radius_scale,
        }
    }

    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig {
            viewport: ViewportConfig {
                width: self.width,
                height: self.height,
            },
            sampling: SamplingConfig {
                num_points: self.num_points,
                rotations: self.rotations,
                growth_factor: self.growth_factor,
                radius_scale: self.radius_scale,
            },
        }
    }
}

/// The most recent scan and the spiral it was sampled with.
pub struct ScanView {
    pub source_path: PathBuf,
    pub result: ScanResult,
    pub path: Arc<SpiralPath>,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub busy: bool,
    /// Parameters changed since the last scan.
    pub params_dirty: bool,
    pub show_branch_a: bool,
    pub show_branch_b: bool,
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            show_branch_a: true,
            show_branch_b: true,
            ..Default::default()
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
        }
    }
}
