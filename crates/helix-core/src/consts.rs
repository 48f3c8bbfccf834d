/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Guard added to the largest spiral angle before normalizing.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Default number of angular samples along the spiral.
pub const DEFAULT_NUM_POINTS: usize = 3000;

/// Default number of full turns of the spiral.
pub const DEFAULT_ROTATIONS: f64 = 8.0;

/// Default radius-vs-angle exponent. Values below 1 pack samples near the center.
pub const DEFAULT_GROWTH_FACTOR: f64 = 0.55;

/// Default maximum radius as a fraction of the smaller viewport dimension.
pub const DEFAULT_RADIUS_SCALE: f64 = 1.0 / 1.8;

/// Largest representable 8-bit intensity.
pub const MAX_INTENSITY: f32 = 255.0;
