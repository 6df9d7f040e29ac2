use ndarray::Array2;
use tracing::debug;

use crate::error::{CoinError, Result};

/// Mirror an out-of-range index without repeating the border pixel
/// (`-1 -> 1`, `n -> n - 2`).
pub(crate) fn reflect101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    let mut i = i;
    if i < 0 {
        i = -i;
    }
    if i > last {
        i = 2 * last - i;
    }
    i.clamp(0, last) as usize
}

/// Second-derivative response of a grayscale field.
///
/// Convolves with the 3x3 Laplacian kernel:
///   0  1  0
///   1 -4  1
///   0  1  0
/// Borders are mirrored (reflect-101), so a flat field yields all zeros.
pub fn laplacian(gray: &Array2<u8>) -> Array2<f64> {
    let (h, w) = gray.dim();
    let mut out = Array2::<f64>::zeros((h, w));
    if h == 0 || w == 0 {
        return out;
    }

    let at = |row: isize, col: isize| -> f64 {
        gray[[reflect101(row, h), reflect101(col, w)]] as f64
    };

    for row in 0..h {
        for col in 0..w {
            let (r, c) = (row as isize, col as isize);
            out[[row, col]] =
                at(r - 1, c) + at(r + 1, c) + at(r, c - 1) + at(r, c + 1) - 4.0 * at(r, c);
        }
    }
    out
}

/// Rescale a real-valued edge field to 8-bit.
///
/// With `m = |min|`, `M = |max|` and `s = m + M`, every response `c` maps to
/// `round((c + m) / s * 255)`. Fails with [`CoinError::DegenerateInput`]
/// when `s == 0`.
pub fn normalize_edges(field: &Array2<f64>) -> Result<Array2<u8>> {
    let min = field.iter().copied().fold(f64::INFINITY, f64::min);
    let max = field.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return Err(CoinError::DegenerateInput);
    }

    let m = min.abs();
    let sum = m + max.abs();
    if sum == 0.0 {
        return Err(CoinError::DegenerateInput);
    }
    debug!(min, max, "Normalizing edge field");

    Ok(field.mapv(|c| (((c + m) / sum) * 255.0).round().clamp(0.0, 255.0) as u8))
}

/// Grayscale field to normalized 8-bit Laplacian edge response.
pub fn edge_field(gray: &Array2<u8>) -> Result<Array2<u8>> {
    normalize_edges(&laplacian(gray))
}
