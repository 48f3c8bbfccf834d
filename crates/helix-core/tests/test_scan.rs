#[allow(dead_code)]
mod common;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{DynamicImage, GrayImage, Luma};
use tempfile::TempDir;

use helix_core::error::HelixError;
use helix_core::frame::Frame;
use helix_core::geometry::{generate, SamplingConfig, Viewport};
use helix_core::scan::config::ScanConfig;
use helix_core::scan::{ScanInput, SpiralScanner};

fn scanner(width: u32, height: u32) -> SpiralScanner {
    SpiralScanner::new(common::viewport(width, height), SamplingConfig::default()).unwrap()
}

#[test]
fn test_constant_image_yields_constant_streams() {
    let dir = TempDir::new().unwrap();
    let path = common::write_solid_png(dir.path(), "gray.png", 100, 100, [128, 128, 128]);
    let scanner = scanner(100, 100);

    let result = scanner.scan(&path).unwrap();

    assert_eq!(result.len(), scanner.path().len());
    assert!(result.alpha_stream.iter().all(|&v| v == 128.0));
    assert!(result.beta_stream.iter().all(|&v| v == 128.0));
}

#[test]
fn test_streams_share_length_with_depth() {
    let scanner = scanner(160, 90);
    let frame = common::index_frame(160, 90);
    let result = scanner.scan(&frame).unwrap();

    assert_eq!(result.alpha_stream.len(), result.depth_stream.len());
    assert_eq!(result.beta_stream.len(), result.depth_stream.len());
    assert_eq!(result.depth_stream, scanner.path().radii());
}

#[test]
fn test_scan_is_deterministic() {
    let scanner = scanner(200, 150);
    let img = DynamicImage::ImageRgb8(image::RgbImage::from_fn(300, 200, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));

    let first = scanner.scan(&img).unwrap();
    let second = scanner.scan(&img).unwrap();

    assert_eq!(first.alpha_stream, second.alpha_stream);
    assert_eq!(first.beta_stream, second.beta_stream);
    assert_eq!(first.depth_stream, second.depth_stream);
}

#[test]
fn test_missing_file_is_decode_error() {
    let scanner = scanner(100, 100);
    let missing = PathBuf::from("/definitely/not/here/frame.png");

    let err = scanner.scan(&missing).unwrap_err();
    match err {
        HelixError::Decode { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_string_paths_are_decoded() {
    let dir = TempDir::new().unwrap();
    let path = common::write_solid_png(dir.path(), "gray.png", 100, 100, [128, 128, 128]);
    let scanner = scanner(100, 100);

    let owned: String = path.to_string_lossy().into_owned();
    let from_str = scanner.scan(owned.as_str()).unwrap();
    let from_string = scanner.scan(&owned).unwrap();
    let from_path = scanner.scan(&path).unwrap();

    assert_eq!(from_str.alpha_stream, from_path.alpha_stream);
    assert_eq!(from_string.beta_stream, from_path.beta_stream);
    assert!(matches!(ScanInput::from("x.png"), ScanInput::Path(_)));
}

#[test]
fn test_mismatched_image_is_resized() {
    let scanner = scanner(64, 48);
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(320, 240, Luma([200])));

    let result = scanner.scan(&img).unwrap();

    assert_eq!(result.source.width(), 64);
    assert_eq!(result.source.height(), 48);
    for v in result.alpha_stream.iter().chain(&result.beta_stream) {
        assert!((v - 200.0).abs() <= 1.0, "got {v}");
    }
}

#[test]
fn test_mismatched_frame_is_resized() {
    let scanner = scanner(40, 30);
    let frame = Frame::filled(80, 60, 42.0);

    let result = scanner.scan(ScanInput::Frame(&frame)).unwrap();

    assert_eq!(result.source.width(), 40);
    assert_eq!(result.source.height(), 30);
    for v in result.alpha_stream.iter().chain(&result.beta_stream) {
        assert!((v - 42.0).abs() < 1e-3, "got {v}");
    }
}

#[test]
fn test_matching_frame_used_as_is() {
    let scanner = scanner(30, 20);
    let frame = common::index_frame(30, 20);
    let result = scanner.scan(&frame).unwrap();
    assert_eq!(result.source, frame);
}

#[test]
fn test_path_is_cached() {
    let scanner = scanner(128, 96);
    let first = scanner.path();
    let second = scanner.path();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        *first,
        generate(scanner.viewport(), scanner.config()).unwrap()
    );
}

#[test]
fn test_invalid_config_fails_at_construction() {
    let config = SamplingConfig {
        growth_factor: 0.0,
        ..SamplingConfig::default()
    };
    let vp = Viewport::new(10, 10).unwrap();
    assert!(matches!(
        SpiralScanner::new(vp, config),
        Err(HelixError::InvalidConfig(_))
    ));

    let mut scan_config = ScanConfig::default();
    scan_config.viewport.width = 0;
    assert!(SpiralScanner::from_config(&scan_config).is_err());
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let dir = TempDir::new().unwrap();
    let dark = common::write_solid_png(dir.path(), "dark.png", 50, 50, [10, 10, 10]);
    let missing = dir.path().join("missing.png");
    let bright = common::write_solid_png(dir.path(), "bright.png", 80, 60, [250, 250, 250]);
    let paths = vec![dark.clone(), missing.clone(), bright.clone()];

    let scanner = scanner(50, 50);
    let done = AtomicUsize::new(0);
    let results = scanner.scan_batch_with_progress(&paths, |_| {
        done.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(done.load(Ordering::Relaxed), 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].0, dark);
    assert_eq!(results[1].0, missing);
    assert_eq!(results[2].0, bright);

    let dark_result = results[0].1.as_ref().unwrap();
    assert!(dark_result.alpha_stream.iter().all(|&v| v == 10.0));
    assert!(matches!(results[1].1, Err(HelixError::Decode { .. })));
    let bright_result = results[2].1.as_ref().unwrap();
    assert!(bright_result.beta_stream.iter().all(|&v| (v - 250.0).abs() <= 1.0));
}

#[test]
fn test_stats_and_correlation() {
    let scanner = scanner(100, 100);
    let result = scanner.scan(&common::index_frame(100, 100)).unwrap();

    let alpha = result.alpha_stats().unwrap();
    assert!(alpha.min <= 5050.0);
    assert!(alpha.max > alpha.min);
    assert!(alpha.mean > alpha.min as f64 && alpha.mean < alpha.max as f64);

    // Opposite points on a linear ramp move in opposite directions.
    let corr = result.correlation().unwrap();
    assert!(corr < -0.9, "got {corr}");
}

#[test]
fn test_correlation_undefined_for_constant_streams() {
    let scanner = scanner(100, 100);
    let result = scanner.scan(&Frame::filled(100, 100, 7.0)).unwrap();
    assert!(result.correlation().is_none());
    assert_eq!(result.beta_stats().unwrap().mean, 7.0);
}
