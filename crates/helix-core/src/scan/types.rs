use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::frame::Frame;

/// Anything the scanner can normalize into a grayscale frame.
#[derive(Clone, Copy, Debug)]
pub enum ScanInput<'a> {
    /// Image file to decode.
    Path(&'a Path),
    /// Already decoded image, color or grayscale.
    Image(&'a DynamicImage),
    /// Grayscale frame, used as is when it already matches the viewport.
    Frame(&'a Frame),
}

impl<'a> From<&'a Path> for ScanInput<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ScanInput<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for ScanInput<'a> {
    fn from(path: &'a str) -> Self {
        Self::Path(Path::new(path))
    }
}

impl<'a> From<&'a String> for ScanInput<'a> {
    fn from(path: &'a String) -> Self {
        Self::Path(Path::new(path))
    }
}

impl<'a> From<&'a DynamicImage> for ScanInput<'a> {
    fn from(image: &'a DynamicImage) -> Self {
        Self::Image(image)
    }
}

impl<'a> From<&'a Frame> for ScanInput<'a> {
    fn from(frame: &'a Frame) -> Self {
        Self::Frame(frame)
    }
}

/// Output of one scan. All three streams share the spiral path's index space,
/// ordered from the center outward.
#[derive(Clone, Debug)]
pub struct ScanResult {
    /// Intensities along branch A.
    pub alpha_stream: Vec<f32>,
    /// Intensities along branch B.
    pub beta_stream: Vec<f32>,
    /// Radius of each sample.
    pub depth_stream: Vec<f64>,
    /// The viewport-sized grayscale frame that was sampled.
    pub source: Frame,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.depth_stream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth_stream.is_empty()
    }

    pub fn alpha_stats(&self) -> Option<StreamStats> {
        StreamStats::from_stream(&self.alpha_stream)
    }

    pub fn beta_stats(&self) -> Option<StreamStats> {
        StreamStats::from_stream(&self.beta_stream)
    }

    /// Pearson correlation between the two streams.
    ///
    /// `None` with fewer than two samples or when either stream is constant.
    pub fn correlation(&self) -> Option<f64> {
        let n = self.alpha_stream.len().min(self.beta_stream.len());
        if n < 2 {
            return None;
        }
        let mean_a = self.alpha_stream.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
        let mean_b = self.beta_stream.iter().map(|&v| v as f64).sum::<f64>() / n as f64;

        let mut cov = 0.0f64;
        let mut var_a = 0.0f64;
        let mut var_b = 0.0f64;
        for (&a, &b) in self.alpha_stream.iter().zip(&self.beta_stream) {
            let da = a as f64 - mean_a;
            let db = b as f64 - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        let denom = (var_a * var_b).sqrt();
        if denom <= f64::EPSILON {
            return None;
        }
        Some(cov / denom)
    }
}

/// Summary statistics of one intensity stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamStats {
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

impl StreamStats {
    pub fn from_stream(stream: &[f32]) -> Option<Self> {
        if stream.is_empty() {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &v in stream {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
        }
        Some(Self {
            min,
            max,
            mean: sum / stream.len() as f64,
        })
    }
}
