use ndarray::Array2;

/// tan(22.5°) and tan(67.5°): sector bounds for gradient direction.
const TAN_22_5: f64 = 0.414_213_562_373_095;
const TAN_67_5: f64 = 2.414_213_562_373_095;

/// Binary edge map plus the Sobel gradients it was derived from.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub edges: Array2<bool>,
    pub gx: Array2<i32>,
    pub gy: Array2<i32>,
}

impl EdgeMap {
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }
}

/// 3x3 Sobel derivatives with replicated borders.
pub fn sobel(img: &Array2<u8>) -> (Array2<i32>, Array2<i32>) {
    let (h, w) = img.dim();
    let mut gx = Array2::<i32>::zeros((h, w));
    let mut gy = Array2::<i32>::zeros((h, w));
    if h == 0 || w == 0 {
        return (gx, gy);
    }

    let at = |row: isize, col: isize| -> i32 {
        let r = row.clamp(0, h as isize - 1) as usize;
        let c = col.clamp(0, w as isize - 1) as usize;
        img[[r, c]] as i32
    };

    for row in 0..h {
        for col in 0..w {
            let (r, c) = (row as isize, col as isize);
            gx[[row, col]] = (at(r - 1, c + 1) + 2 * at(r, c + 1) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2 * at(r, c - 1) + at(r + 1, c - 1));
            gy[[row, col]] = (at(r + 1, c - 1) + 2 * at(r + 1, c) + at(r + 1, c + 1))
                - (at(r - 1, c - 1) + 2 * at(r - 1, c) + at(r - 1, c + 1));
        }
    }
    (gx, gy)
}

/// Canny edge detection without pre-smoothing.
///
/// L1 gradient magnitude, non-maximum suppression over four direction
/// sectors, then 8-connected hysteresis between `low` and `high`.
pub fn canny(img: &Array2<u8>, low: f64, high: f64) -> EdgeMap {
    let (h, w) = img.dim();
    let (gx, gy) = sobel(img);
    let mag = Array2::from_shape_fn((h, w), |(r, c)| gx[[r, c]].abs() + gy[[r, c]].abs());

    let mag_at = |row: isize, col: isize| -> i32 {
        if row < 0 || col < 0 || row >= h as isize || col >= w as isize {
            0
        } else {
            mag[[row as usize, col as usize]]
        }
    };

    // 0 = suppressed, 1 = weak candidate, 2 = strong.
    let mut class = Array2::<u8>::zeros((h, w));
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            let m = mag[[row, col]];
            if (m as f64) <= low {
                continue;
            }
            let ax = gx[[row, col]].abs() as f64;
            let ay = gy[[row, col]].abs() as f64;
            let (r, c) = (row as isize, col as isize);

            let (before, after) = if ay <= TAN_22_5 * ax {
                (mag_at(r, c - 1), mag_at(r, c + 1))
            } else if ay >= TAN_67_5 * ax {
                (mag_at(r - 1, c), mag_at(r + 1, c))
            } else if (gx[[row, col]] < 0) != (gy[[row, col]] < 0) {
                (mag_at(r - 1, c + 1), mag_at(r + 1, c - 1))
            } else {
                (mag_at(r - 1, c - 1), mag_at(r + 1, c + 1))
            };

            if m > before && m >= after {
                if (m as f64) > high {
                    class[[row, col]] = 2;
                    stack.push((row, col));
                } else {
                    class[[row, col]] = 1;
                }
            }
        }
    }

    let mut edges = Array2::from_elem((h, w), false);
    for &(row, col) in &stack {
        edges[[row, col]] = true;
    }

    while let Some((row, col)) = stack.pop() {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if class[[nr, nc]] == 1 && !edges[[nr, nc]] {
                    edges[[nr, nc]] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }

    EdgeMap { edges, gx, gy }
}
