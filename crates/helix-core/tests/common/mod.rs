use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use ndarray::Array2;

use helix_core::frame::Frame;
use helix_core::geometry::{SamplingConfig, Viewport};

/// Frame where each pixel holds its own linear index `y * width + x`.
pub fn index_frame(width: u32, height: u32) -> Frame {
    let w = width as usize;
    let data = Array2::from_shape_fn((height as usize, w), |(row, col)| (row * w + col) as f32);
    Frame::new(data)
}

pub fn viewport(width: u32, height: u32) -> Viewport {
    Viewport::new(width, height).expect("valid viewport")
}

/// The 100x100 / 10-point single-turn layout used by several tests.
pub fn small_config(radius_scale: f64) -> SamplingConfig {
    SamplingConfig {
        num_points: 10,
        rotations: 1.0,
        growth_factor: 0.5,
        radius_scale,
    }
}

/// Write a solid-color RGB PNG and return its path.
pub fn write_solid_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .expect("write test png");
    path
}
