/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Inverse ratio of the Hough accumulator resolution to the image resolution.
pub const DEFAULT_HOUGH_DP: f64 = 1.1;

/// Minimum distance in pixels between two accepted circle centers.
pub const DEFAULT_HOUGH_MIN_DIST: f64 = 270.0;

/// Upper Canny threshold; the lower one is half of it.
pub const DEFAULT_CANNY_HIGH_THRESHOLD: f64 = 100.0;

/// Votes a center cell (and a radius bin) needs to be accepted.
pub const DEFAULT_HOUGH_ACC_THRESHOLD: u32 = 100;

/// Gaussian sigma applied to the edge field before taking vote directions.
pub const DEFAULT_VOTE_SIGMA: f64 = 3.0;

/// Smallest coin radius searched, in pixels.
pub const DEFAULT_MIN_RADIUS: i32 = 95;

/// Largest coin radius searched, in pixels.
pub const DEFAULT_MAX_RADIUS: i32 = 200;

/// Radius of the center sample as a fraction of the coin radius.
pub const DEFAULT_CENTER_FRACTION: f64 = 0.1;

/// Thickness of the outline that selects the ring sample.
pub const DEFAULT_RING_THICKNESS: i32 = 20;

/// Weight of the overlay layer when blending it into the output.
pub const OVERLAY_ALPHA: f64 = 0.25;

/// Thickness of the outline drawn around a classified coin.
pub const OUTLINE_THICKNESS: i32 = 10;

/// Pixel size of the value label font; digits come out about 25 px tall.
pub const LABEL_FONT_SIZE: f32 = 40.0;

/// Upper bound of the channel divergence metric: twice the channel range.
pub const MAX_DIVERGENCE: f64 = 510.0;
