use crate::error::{HelixError, Result};
use crate::frame::Frame;
use crate::geometry::{Branch, SpiralPath};

/// Gather intensities along both spiral branches.
///
/// Returns `(alpha, beta)`, each index-aligned with `path.radii()`. The frame
/// must have exactly the dimensions of the viewport the path was built for.
pub fn sample(path: &SpiralPath, frame: &Frame) -> Result<(Vec<f32>, Vec<f32>)> {
    check_dimensions(path, frame)?;
    Ok((
        gather(path.branch_a(), frame),
        gather(path.branch_b(), frame),
    ))
}

/// Intensities under every coordinate of one branch, in path order.
///
/// Coordinates are assumed to be in bounds for `frame`.
pub fn gather(branch: &Branch, frame: &Frame) -> Vec<f32> {
    branch
        .iter()
        .map(|(x, y)| frame.data[[y as usize, x as usize]])
        .collect()
}

fn check_dimensions(path: &SpiralPath, frame: &Frame) -> Result<()> {
    let vp = path.viewport();
    if frame.width() != vp.width() as usize || frame.height() != vp.height() as usize {
        return Err(HelixError::DimensionMismatch {
            expected_width: vp.width(),
            expected_height: vp.height(),
            actual_width: frame.width() as u32,
            actual_height: frame.height() as u32,
        });
    }
    Ok(())
}
