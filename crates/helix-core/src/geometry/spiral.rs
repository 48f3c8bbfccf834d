use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    ANGLE_EPSILON, DEFAULT_GROWTH_FACTOR, DEFAULT_NUM_POINTS, DEFAULT_RADIUS_SCALE,
    DEFAULT_ROTATIONS,
};
use crate::error::{HelixError, Result};

use super::viewport::Viewport;

/// Parameters controlling how the double spiral is laid out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Total angular samples before bounds filtering.
    pub num_points: usize,
    /// Number of full turns from the center to the outermost sample.
    pub rotations: f64,
    /// Exponent applied to the normalized angle, in (0, 1].
    pub growth_factor: f64,
    /// Maximum radius as a fraction of `min(width, height)`.
    pub radius_scale: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            rotations: DEFAULT_ROTATIONS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            radius_scale: DEFAULT_RADIUS_SCALE,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_points == 0 {
            return Err(HelixError::InvalidConfig(
                "num_points must be greater than 0".into(),
            ));
        }
        if !self.rotations.is_finite() || self.rotations < 0.0 {
            return Err(HelixError::InvalidConfig(format!(
                "rotations must be a finite non-negative number, got {}",
                self.rotations
            )));
        }
        // A zero exponent turns 0^0 at the center sample into a float convention.
        if !(self.growth_factor > 0.0 && self.growth_factor <= 1.0) {
            return Err(HelixError::InvalidConfig(format!(
                "growth_factor must be in (0, 1], got {}",
                self.growth_factor
            )));
        }
        if !self.radius_scale.is_finite() || self.radius_scale <= 0.0 {
            return Err(HelixError::InvalidConfig(format!(
                "radius_scale must be a finite positive number, got {}",
                self.radius_scale
            )));
        }
        // Derived extents must stay finite for every viewport size.
        if !(self.rotations * TAU).is_finite() {
            return Err(HelixError::InvalidConfig(format!(
                "rotations too large, total angle overflows: {}",
                self.rotations
            )));
        }
        if !(self.radius_scale * u32::MAX as f64).is_finite() {
            return Err(HelixError::InvalidConfig(format!(
                "radius_scale too large, maximum radius overflows: {}",
                self.radius_scale
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for SamplingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points, {} turns, growth {}, radius {:.3}",
            self.num_points, self.rotations, self.growth_factor, self.radius_scale
        )
    }
}

/// Pixel coordinates of one spiral branch, stored as parallel x/y columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Branch {
    pub xs: Vec<u32>,
    pub ys: Vec<u32>,
}

impl Branch {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, (x, y): (u32, u32)) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(u32, u32)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, u32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Precomputed in-bounds samples of the two spiral branches.
///
/// Every column shares one index space: sample `i` sits at `branch_a[i]` and
/// `branch_b[i]`, at angle `thetas[i]` (branch B adds pi) and radius
/// `radii[i]`. Radii are non-decreasing.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralPath {
    viewport: Viewport,
    thetas: Vec<f64>,
    radii: Vec<f64>,
    branch_a: Branch,
    branch_b: Branch,
    generated: usize,
    max_radius: f64,
}

impl SpiralPath {
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn thetas(&self) -> &[f64] {
        &self.thetas
    }

    /// Radius of each retained sample, used as the depth proxy.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn branch_a(&self) -> &Branch {
        &self.branch_a
    }

    pub fn branch_b(&self) -> &Branch {
        &self.branch_b
    }

    pub fn coord_a(&self, index: usize) -> Option<(u32, u32)> {
        self.branch_a.get(index)
    }

    pub fn coord_b(&self, index: usize) -> Option<(u32, u32)> {
        self.branch_b.get(index)
    }

    /// Number of samples produced before bounds filtering.
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Radius the spiral would reach at its final angle.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }
}

/// Build the double spiral for `viewport`.
///
/// Angles are spaced evenly over `[0, rotations * 2pi]`. Each radius is
/// `max_radius * (theta / theta_max) ^ growth_factor`, so with a growth factor
/// below 1 the inner turns are sampled more densely than the outer ones.
/// Samples where either branch falls outside the viewport are dropped from
/// both branches.
pub fn generate(viewport: &Viewport, config: &SamplingConfig) -> Result<SpiralPath> {
    config.validate()?;
    Ok(trace(viewport, config))
}

/// Generation without validation; `config` must already be valid.
pub(crate) fn trace(viewport: &Viewport, config: &SamplingConfig) -> SpiralPath {
    let n = config.num_points;
    let max_theta = config.rotations * TAU;
    let max_radius = config.radius_scale * viewport.min_dimension() as f64;
    let step = if n > 1 { max_theta / (n - 1) as f64 } else { 0.0 };
    let denom = max_theta + ANGLE_EPSILON;
    let (cx, cy) = viewport.center();
    let (cx, cy) = (cx as f64, cy as f64);

    let mut thetas = Vec::with_capacity(n);
    let mut radii = Vec::with_capacity(n);
    let mut branch_a = Branch::with_capacity(n);
    let mut branch_b = Branch::with_capacity(n);

    for i in 0..n {
        let theta = if n > 1 && i == n - 1 {
            max_theta
        } else {
            i as f64 * step
        };
        // With no rotation every angle is zero; walk outward along a single ray.
        let progress = if max_theta > 0.0 {
            theta / denom
        } else if n > 1 {
            i as f64 / (n - 1) as f64
        } else {
            0.0
        };
        let radius = max_radius * progress.powf(config.growth_factor);

        let (xa, ya) = project(cx, cy, radius, theta);
        let (xb, yb) = project(cx, cy, radius, theta + PI);
        if !(viewport.contains(xa, ya) && viewport.contains(xb, yb)) {
            continue;
        }

        thetas.push(theta);
        radii.push(radius);
        branch_a.push((xa as u32, ya as u32));
        branch_b.push((xb as u32, yb as u32));
    }

    debug!(
        viewport = %viewport,
        generated = n,
        retained = radii.len(),
        max_radius,
        "Generated spiral path"
    );

    SpiralPath {
        viewport: *viewport,
        thetas,
        radii,
        branch_a,
        branch_b,
        generated: n,
        max_radius,
    }
}

/// Polar offset from the center, truncated toward zero to a pixel index.
fn project(cx: f64, cy: f64, radius: f64, theta: f64) -> (i64, i64) {
    let x = cx + radius * theta.cos();
    let y = cy + radius * theta.sin();
    (x.trunc() as i64, y.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_truncates_toward_zero() {
        assert_eq!(project(0.0, 0.0, 0.5, PI), (0, 0));
        assert_eq!(project(10.0, 10.0, 2.7, 0.0), (12, 10));
        assert_eq!(project(0.0, 0.0, 1.5, PI), (-1, 0));
    }

    #[test]
    fn test_single_point_sits_at_center() {
        let vp = Viewport::new(20, 10).unwrap();
        let config = SamplingConfig {
            num_points: 1,
            ..SamplingConfig::default()
        };
        let path = generate(&vp, &config).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.thetas(), &[0.0]);
        assert_eq!(path.coord_a(0), Some((10, 5)));
        assert_eq!(path.coord_b(0), Some((10, 5)));
    }
}
