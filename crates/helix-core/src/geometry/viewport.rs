use crate::error::{HelixError, Result};

/// Fixed-size sampling canvas.
///
/// Corners are listed clockwise from the top-left: `(0, 0)`, `(w, 0)`,
/// `(w, h)`, `(0, h)`. They describe the outer rectangle, so the right and
/// bottom corners sit one pixel past the last addressable column/row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HelixError::InvalidConfig(format!(
                "viewport dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    pub fn corners(&self) -> [(u32, u32); 4] {
        [
            (0, 0),
            (self.width, 0),
            (self.width, self.height),
            (0, self.height),
        ]
    }

    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    /// True when `(x, y)` is an addressable pixel.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uses_integer_division() {
        let vp = Viewport::new(101, 51).unwrap();
        assert_eq!(vp.center(), (50, 25));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Viewport::new(0, 10),
            Err(HelixError::InvalidConfig(_))
        ));
        assert!(Viewport::new(10, 0).is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let vp = Viewport::new(4, 3).unwrap();
        assert!(vp.contains(0, 0));
        assert!(vp.contains(3, 2));
        assert!(!vp.contains(4, 2));
        assert!(!vp.contains(3, 3));
        assert!(!vp.contains(-1, 0));
    }
}
