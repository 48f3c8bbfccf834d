use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use image::DynamicImage;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::frame::Frame;
use crate::geometry::spiral::trace;
use crate::geometry::{SamplingConfig, SpiralPath, Viewport};
use crate::io::image_io::{decode, resize, resize_frame, to_grayscale};
use crate::sampler::sample;

use super::config::ScanConfig;
use super::types::{ScanInput, ScanResult};

/// Samples images along a double spiral fixed to one viewport.
///
/// The spiral path is generated on first use and reused by every scan.
/// Changing the viewport or sampling parameters means building a new scanner.
#[derive(Debug)]
pub struct SpiralScanner {
    viewport: Viewport,
    config: SamplingConfig,
    path: OnceLock<Arc<SpiralPath>>,
}

impl SpiralScanner {
    pub fn new(viewport: Viewport, config: SamplingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            viewport,
            config,
            path: OnceLock::new(),
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(config.viewport.build()?, config.sampling.clone())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// The cached spiral path, generated on the first call.
    pub fn path(&self) -> Arc<SpiralPath> {
        self.path
            .get_or_init(|| Arc::new(trace(&self.viewport, &self.config)))
            .clone()
    }

    /// Bring any input to a viewport-sized grayscale frame.
    pub fn normalize<'a>(&self, input: impl Into<ScanInput<'a>>) -> Result<Frame> {
        match input.into() {
            ScanInput::Path(path) => {
                let image = decode(path)?;
                Ok(self.normalize_image(&image))
            }
            ScanInput::Image(image) => Ok(self.normalize_image(image)),
            ScanInput::Frame(frame) => {
                if self.matches_viewport(frame.width() as u32, frame.height() as u32) {
                    Ok(frame.clone())
                } else {
                    debug!(
                        from_width = frame.width(),
                        from_height = frame.height(),
                        "Resizing frame to viewport"
                    );
                    Ok(resize_frame(
                        frame,
                        self.viewport.width(),
                        self.viewport.height(),
                    ))
                }
            }
        }
    }

    fn normalize_image(&self, image: &DynamicImage) -> Frame {
        if self.matches_viewport(image.width(), image.height()) {
            to_grayscale(image)
        } else {
            to_grayscale(&resize(
                image,
                self.viewport.width(),
                self.viewport.height(),
            ))
        }
    }

    fn matches_viewport(&self, width: u32, height: u32) -> bool {
        width == self.viewport.width() && height == self.viewport.height()
    }

    /// Normalize `input` and sample it along both spiral branches.
    pub fn scan<'a>(&self, input: impl Into<ScanInput<'a>>) -> Result<ScanResult> {
        let source = self.normalize(input)?;
        let path = self.path();
        let (alpha_stream, beta_stream) = sample(&path, &source)?;
        info!(samples = path.len(), viewport = %self.viewport, "Scan complete");

        Ok(ScanResult {
            alpha_stream,
            beta_stream,
            depth_stream: path.radii().to_vec(),
            source,
        })
    }

    /// Scan many image files in parallel. Results keep the input order and a
    /// failing file does not stop the others.
    pub fn scan_batch(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<ScanResult>)> {
        self.scan_batch_with_progress(paths, |_| {})
    }

    /// Like [`scan_batch`](Self::scan_batch), calling `on_progress(items_done)`
    /// as each file finishes.
    pub fn scan_batch_with_progress(
        &self,
        paths: &[PathBuf],
        on_progress: impl Fn(usize) + Send + Sync,
    ) -> Vec<(PathBuf, Result<ScanResult>)> {
        // Warm the path cache before fanning out.
        self.path();

        let done = AtomicUsize::new(0);
        let results: Vec<(PathBuf, Result<ScanResult>)> = paths
            .par_iter()
            .map(|p| {
                let result = self.scan(p);
                let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
                on_progress(completed);
                (p.clone(), result)
            })
            .collect();

        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        info!(total = paths.len(), failed, "Batch scan complete");
        results
    }
}
