use ndarray::Array2;

/// A single grayscale image frame.
/// Pixel values are f32 on the 8-bit intensity scale [0.0, 255.0] when the
/// frame comes from a decoded image.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// A frame where every pixel has the same intensity.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self::new(Array2::from_elem((height as usize, width as usize), value))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Intensity at column `x`, row `y`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[[y as usize, x as usize]]
    }
}
