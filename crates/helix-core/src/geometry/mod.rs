pub mod spiral;
pub mod viewport;

pub use spiral::{generate, Branch, SamplingConfig, SpiralPath};
pub use viewport::Viewport;
