#[allow(dead_code)]
mod common;

use image::{DynamicImage, Rgb, RgbImage};
use tempfile::TempDir;

use helix_core::io::image_io::{decode, save_png};
use helix_core::render::overlay::{render_overlay, BRANCH_A_COLOR};
use helix_core::scan::config::ScanConfig;
use helix_core::scan::SpiralScanner;

/// Radial gradient: dark at the center, bright at the edges.
fn build_radial_image(width: u32, height: u32) -> RgbImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let max_d = (cx * cx + cy * cy).sqrt();
    RgbImage::from_fn(width, height, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        let v = (d / max_d * 255.0) as u8;
        Rgb([v, v, v])
    })
}

#[test]
fn test_full_scan_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("radial.png");
    build_radial_image(400, 300).save(&input).unwrap();

    let mut config = ScanConfig::default();
    config.viewport.width = 200;
    config.viewport.height = 150;
    let scanner = SpiralScanner::from_config(&config).unwrap();

    let result = scanner.scan(&input).unwrap();
    assert!(!result.is_empty());
    assert_eq!(result.source.width(), 200);
    assert_eq!(result.source.height(), 150);

    // Brightness tracks radius on a radial gradient, on both branches.
    let n = result.len();
    let inner = &result.alpha_stream[..n / 10];
    let outer = &result.alpha_stream[n - n / 10..];
    let mean = |s: &[f32]| s.iter().sum::<f32>() / s.len() as f32;
    assert!(mean(outer) > mean(inner) + 50.0);
    let beta_inner = &result.beta_stream[..n / 10];
    let beta_outer = &result.beta_stream[n - n / 10..];
    assert!(mean(beta_outer) > mean(beta_inner) + 50.0);

    // Symmetric image: the two branches see nearly the same signal.
    let corr = result.correlation().unwrap();
    assert!(corr > 0.9, "got {corr}");

    let overlay_path = dir.path().join("overlay.png");
    let path = scanner.path();
    save_png(&render_overlay(&result.source, &path), &overlay_path).unwrap();

    let overlay = decode(&overlay_path).unwrap().to_rgb8();
    assert_eq!(overlay.dimensions(), (200, 150));
    let (x, y) = path.coord_a(path.len() / 2).unwrap();
    let px = *overlay.get_pixel(x, y);
    assert!(px == BRANCH_A_COLOR || px == helix_core::render::overlay::BRANCH_B_COLOR);
}

#[test]
fn test_decoded_and_path_inputs_agree() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("radial.png");
    let img = build_radial_image(120, 90);
    img.save(&input).unwrap();

    let mut config = ScanConfig::default();
    config.viewport.width = 120;
    config.viewport.height = 90;
    let scanner = SpiralScanner::from_config(&config).unwrap();

    let from_path = scanner.scan(&input).unwrap();
    let from_image = scanner.scan(&DynamicImage::ImageRgb8(img)).unwrap();
    assert_eq!(from_path.alpha_stream, from_image.alpha_stream);
    assert_eq!(from_path.beta_stream, from_image.beta_stream);
}
