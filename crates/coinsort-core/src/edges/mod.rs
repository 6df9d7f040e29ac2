pub mod canny;
pub mod laplacian;
pub mod smooth;

pub use canny::{canny, EdgeMap};
pub use laplacian::{edge_field, laplacian, normalize_edges};
pub use smooth::{gaussian_blur, smoothed_gradients};
