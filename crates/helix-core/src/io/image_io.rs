use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, RgbImage};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MAX_INTENSITY, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{HelixError, Result};
use crate::frame::Frame;

/// Decode an image file of any format supported by the `image` crate.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| HelixError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Resample to exactly `width` x `height` with bilinear (triangle) filtering.
/// Aspect ratio is not preserved.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    debug!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "Resizing image"
    );
    image.resize_exact(width, height, FilterType::Triangle)
}

/// Resample a grayscale frame to exactly `width` x `height`.
///
/// Float images are clamped to [0, 1] by the resampler, so intensities are
/// mapped into that range and back around the resize.
pub fn resize_frame(frame: &Frame, width: u32, height: u32) -> Frame {
    let lo = frame.data.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = frame.data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if hi <= lo {
        let fill = if lo.is_finite() { lo } else { 0.0 };
        return Frame::filled(width, height, fill);
    }
    let range = hi - lo;

    let src = ImageBuffer::<Luma<f32>, Vec<f32>>::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.data.iter().map(|&v| (v - lo) / range).collect(),
    )
    .expect("buffer size matches dimensions");
    let resized = imageops::resize(&src, width, height, FilterType::Triangle);
    let data = Array2::from_shape_vec(
        (height as usize, width as usize),
        resized.into_raw().into_iter().map(|v| v * range + lo).collect(),
    )
    .expect("buffer size matches dimensions");
    Frame::new(data)
}

/// Convert to a single-channel frame on the 8-bit intensity scale.
///
/// Color images use BT.601 luma rounded to the nearest integer level.
/// Grayscale images keep their luma channel as is.
pub fn to_grayscale(image: &DynamicImage) -> Frame {
    if !image.color().has_color() {
        let gray = image.to_luma8();
        let (w, h) = gray.dimensions();
        let data = Array2::from_shape_vec(
            (h as usize, w as usize),
            gray.into_raw().into_iter().map(f32::from).collect(),
        )
        .expect("buffer size matches dimensions");
        return Frame::new(data);
    }

    let rgb = image.to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        luma_parallel(&rgb, h, w)
    } else {
        luma_sequential(&rgb, h, w)
    }
}

fn luma(pixel: &image::Rgb<u8>) -> f32 {
    let [r, g, b] = pixel.0;
    let y = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    y.round().min(MAX_INTENSITY)
}

fn luma_parallel(rgb: &RgbImage, h: usize, w: usize) -> Frame {
    let rows: Vec<Vec<f32>> = (0..h)
        .into_par_iter()
        .map(|row| {
            (0..w)
                .map(|col| luma(rgb.get_pixel(col as u32, row as u32)))
                .collect()
        })
        .collect();

    let mut data = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            data[[row, col]] = val;
        }
    }
    Frame::new(data)
}

fn luma_sequential(rgb: &RgbImage, h: usize, w: usize) -> Frame {
    let mut data = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = luma(rgb.get_pixel(col as u32, row as u32));
        }
    }
    Frame::new(data)
}

/// Save an RGB image as 8-bit PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
