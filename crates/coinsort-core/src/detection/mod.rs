pub mod config;
pub mod hough;

pub use config::HoughParams;
pub use hough::detect_circles;
