use image::{Rgb, RgbImage};

use crate::consts::MAX_INTENSITY;
use crate::frame::Frame;
use crate::geometry::{Branch, SpiralPath};

/// Branch A marker color (lime).
pub const BRANCH_A_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Branch B marker color (cyan).
pub const BRANCH_B_COLOR: Rgb<u8> = Rgb([0, 255, 255]);

/// Viewport border color (red).
pub const BORDER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw both spiral branches and the viewport border over a grayscale frame.
pub fn render_overlay(frame: &Frame, path: &SpiralPath) -> RgbImage {
    let mut img = frame_to_rgb(frame);
    draw_border(&mut img, path);
    draw_branch(&mut img, path.branch_a(), BRANCH_A_COLOR);
    draw_branch(&mut img, path.branch_b(), BRANCH_B_COLOR);
    img
}

/// Grayscale frame to RGB, clamping intensities to the 8-bit range.
pub fn frame_to_rgb(frame: &Frame) -> RgbImage {
    let (w, h) = (frame.width() as u32, frame.height() as u32);
    RgbImage::from_fn(w, h, |x, y| {
        let v = frame.get(x, y).clamp(0.0, MAX_INTENSITY) as u8;
        Rgb([v, v, v])
    })
}

fn draw_branch(img: &mut RgbImage, branch: &Branch, color: Rgb<u8>) {
    for (x, y) in branch.iter() {
        if let Some(px) = img.get_pixel_mut_checked(x, y) {
            *px = color;
        }
    }
}

/// Outline the rectangle spanned by the viewport corners. Corners on the far
/// edges lie one pixel outside the image, so they are pulled in to the last
/// row/column.
fn draw_border(img: &mut RgbImage, path: &SpiralPath) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let max_x = img.width() - 1;
    let max_y = img.height() - 1;
    let corners = path.viewport().corners().map(|(x, y)| (x.min(max_x), y.min(max_y)));

    for i in 0..corners.len() {
        let (x0, y0) = corners[i];
        let (x1, y1) = corners[(i + 1) % corners.len()];
        for x in x0.min(x1)..=x0.max(x1) {
            for y in y0.min(y1)..=y0.max(y1) {
                img.put_pixel(x, y, BORDER_COLOR);
            }
        }
    }
}
