use ndarray::Array2;
use rayon::prelude::*;

/// Minimum pixel count (h*w) to justify row-level parallelism.
const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Separable Gaussian blur of an 8-bit field, replicating the border.
pub fn gaussian_blur(field: &Array2<u8>, sigma: f64) -> Array2<f64> {
    let data = field.mapv(f64::from);
    if sigma <= 0.0 {
        return data;
    }
    let kernel = make_gaussian_kernel(sigma);
    let row_pass = convolve(&data, &kernel, Direction::Rows);
    convolve(&row_pass, &kernel, Direction::Cols)
}

/// Sobel derivatives of the field after a Gaussian blur of `sigma`.
///
/// Used for vote directions: on a one-pixel Laplacian ridge the raw 3x3
/// gradient snaps to the pixel grid.
pub fn smoothed_gradients(field: &Array2<u8>, sigma: f64) -> (Array2<f64>, Array2<f64>) {
    let blurred = gaussian_blur(field, sigma);
    let (h, w) = blurred.dim();
    let mut gx = Array2::<f64>::zeros((h, w));
    let mut gy = Array2::<f64>::zeros((h, w));
    if h == 0 || w == 0 {
        return (gx, gy);
    }

    let at = |row: isize, col: isize| -> f64 {
        let r = row.clamp(0, h as isize - 1) as usize;
        let c = col.clamp(0, w as isize - 1) as usize;
        blurred[[r, c]]
    };

    for row in 0..h {
        for col in 0..w {
            let (r, c) = (row as isize, col as isize);
            gx[[row, col]] = (at(r - 1, c + 1) + 2.0 * at(r, c + 1) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2.0 * at(r, c - 1) + at(r + 1, c - 1));
            gy[[row, col]] = (at(r + 1, c - 1) + 2.0 * at(r + 1, c) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2.0 * at(r - 1, c) + at(r - 1, c + 1));
        }
    }
    (gx, gy)
}

fn make_gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (sigma * 3.0).ceil() as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (-x * x / s2).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[derive(Clone, Copy)]
enum Direction {
    Rows,
    Cols,
}

fn convolve(data: &Array2<f64>, kernel: &[f64], direction: Direction) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;

    let sample = |row: usize, col: usize| -> f64 {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let offset = ki as isize - radius;
                let v = match direction {
                    Direction::Rows => {
                        data[[row, (col as isize + offset).clamp(0, w as isize - 1) as usize]]
                    }
                    Direction::Cols => {
                        data[[(row as isize + offset).clamp(0, h as isize - 1) as usize, col]]
                    }
                };
                v * kv
            })
            .sum()
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f64>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| sample(row, col)).collect())
            .collect();

        let mut result = Array2::<f64>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| sample(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_keeps_flat_field() {
        let field = Array2::<u8>::from_elem((20, 30), 77);
        let blurred = gaussian_blur(&field, 2.0);
        assert!(blurred.iter().all(|&v| (v - 77.0).abs() < 1e-9));
    }

    #[test]
    fn zero_sigma_is_identity() {
        let field = Array2::from_shape_fn((5, 5), |(r, c)| (r * 10 + c) as u8);
        let blurred = gaussian_blur(&field, 0.0);
        assert_eq!(blurred[[3, 4]], 34.0);
    }

    #[test]
    fn gradient_of_ramp_points_along_ramp() {
        let field = Array2::from_shape_fn((21, 21), |(_, c)| (c * 10) as u8);
        let (gx, gy) = smoothed_gradients(&field, 1.5);
        assert!(gx[[10, 10]] > 0.0);
        assert!(gy[[10, 10]].abs() < 1e-9);
    }
}
