use ndarray::Array2;
use tracing::debug;

use crate::edges::{canny, smoothed_gradients};
use crate::error::Result;
use crate::frame::Circle;

use super::config::HoughParams;

/// Gradient magnitude below which an edge pixel casts no votes.
const MIN_VOTE_MAGNITUDE: f64 = 1.0;

/// Detect circles in a normalized 8-bit edge field.
///
/// Pipeline: Canny edges -> gradient-directed center voting -> local maxima
/// sorted by votes -> min-distance suppression -> radius from edge-distance
/// histogram.
///
/// Edge pixels and their vote threshold come from the raw field. Vote
/// directions come from the field blurred by `vote_sigma`.
///
/// Circles come back in acceptance order (strongest center first), which is
/// not a geometric ordering. An empty vector means nothing was found.
pub fn detect_circles(field: &Array2<u8>, params: &HoughParams) -> Result<Vec<Circle>> {
    params.validate()?;
    let (h, w) = field.dim();
    if h == 0 || w == 0 {
        return Ok(Vec::new());
    }

    let edge_map = canny(field, params.canny_low(), params.canny_high);
    let (dir_x, dir_y) = if params.vote_sigma > 0.0 {
        smoothed_gradients(field, params.vote_sigma)
    } else {
        (edge_map.gx.mapv(f64::from), edge_map.gy.mapv(f64::from))
    };
    let idp = 1.0 / params.dp;
    let acols = ((w as f64) * idp).round() as usize;
    let arows = ((h as f64) * idp).round() as usize;
    let stride = acols + 2;
    let mut accum = vec![0u32; (arows + 2) * stride];
    let mut points: Vec<(f64, f64)> = Vec::new();

    // Step 1: every edge pixel votes along both gradient directions.
    for row in 0..h {
        for col in 0..w {
            if !edge_map.edges[[row, col]] {
                continue;
            }
            let raw_x = edge_map.gx[[row, col]] as f64;
            let raw_y = edge_map.gy[[row, col]] as f64;
            if raw_x.hypot(raw_y) < MIN_VOTE_MAGNITUDE {
                continue;
            }
            let (vx, vy) = (dir_x[[row, col]], dir_y[[row, col]]);
            let mag = vx.hypot(vy);
            if mag < f64::EPSILON {
                continue;
            }

            let (sx, sy) = (vx * idp / mag, vy * idp / mag);
            let (x0, y0) = (col as f64 * idp, row as f64 * idp);
            for sign in [1.0, -1.0] {
                for r in params.min_radius..=params.max_radius {
                    let ax = (x0 + sign * sx * r as f64).floor();
                    let ay = (y0 + sign * sy * r as f64).floor();
                    if ax < 0.0 || ay < 0.0 || ax >= acols as f64 || ay >= arows as f64 {
                        break;
                    }
                    accum[(ay as usize + 1) * stride + ax as usize + 1] += 1;
                }
            }
            points.push((col as f64, row as f64));
        }
    }

    // Step 2: local maxima above the threshold, strongest first.
    let mut centers: Vec<usize> = Vec::new();
    for y in 0..arows {
        for x in 0..acols {
            let base = (y + 1) * stride + x + 1;
            let v = accum[base];
            if v > params.acc_threshold
                && v > accum[base - 1]
                && v >= accum[base + 1]
                && v > accum[base - stride]
                && v >= accum[base + stride]
            {
                centers.push(base);
            }
        }
    }
    centers.sort_by(|&a, &b| accum[b].cmp(&accum[a]).then(a.cmp(&b)));
    debug!(
        edges = edge_map.edge_count(),
        voters = points.len(),
        candidates = centers.len(),
        "Hough accumulator built"
    );

    // Step 3: suppress close centers, then estimate each radius.
    let min_dist_sq = params.min_dist * params.min_dist;
    let min_r_sq = (params.min_radius as f64).powi(2);
    let max_r_sq = (params.max_radius as f64).powi(2);
    let mut found: Vec<(f64, f64, f64)> = Vec::new();
    let mut dist: Vec<f64> = Vec::with_capacity(points.len());

    for &base in &centers {
        // Cell (x, y) collects votes for image points in [x*dp, (x+1)*dp).
        let y = base / stride - 1;
        let x = base % stride - 1;
        let (dy, dx) = refine_peak(&accum, stride, base);
        let cx = (x as f64 + 0.5 + dx) * params.dp;
        let cy = (y as f64 + 0.5 + dy) * params.dp;

        if found
            .iter()
            .any(|&(fx, fy, _)| (fx - cx).powi(2) + (fy - cy).powi(2) < min_dist_sq)
        {
            continue;
        }

        dist.clear();
        dist.extend(points.iter().filter_map(|&(px, py)| {
            let d2 = (cx - px).powi(2) + (cy - py).powi(2);
            (min_r_sq..=max_r_sq).contains(&d2).then(|| d2.sqrt())
        }));
        if let Some((radius, support)) = best_radius(&mut dist, params.dp) {
            if support > params.acc_threshold as usize {
                found.push((cx, cy, radius));
            }
        }
    }

    Ok(found
        .into_iter()
        .map(|(cx, cy, r)| Circle::new(cx.round() as i32, cy.round() as i32, r.round() as i32))
        .collect())
}

/// Sub-cell offset of an accumulator peak from 1D parabola fits through its
/// vertical and horizontal neighbors, each clamped to half a cell.
///
/// The accumulator carries a one-cell border, so every candidate has all
/// four neighbors.
fn refine_peak(accum: &[u32], stride: usize, base: usize) -> (f64, f64) {
    let fit = |prev: u32, curr: u32, next: u32| -> f64 {
        let (p, c, n) = (prev as f64, curr as f64, next as f64);
        let denom = p - 2.0 * c + n;
        if denom.abs() > 1e-12 {
            ((p - n) / (2.0 * denom)).clamp(-0.5, 0.5)
        } else {
            0.0
        }
    };
    let v = accum[base];
    let d_row = fit(accum[base - stride], v, accum[base + stride]);
    let d_col = fit(accum[base - 1], v, accum[base + 1]);
    (d_row, d_col)
}

/// Pick the radius bin (width `bin`) with the best support per unit radius.
///
/// Returns `(radius, support)`; `None` when there are no distances.
fn best_radius(dist: &mut [f64], bin: f64) -> Option<(f64, usize)> {
    if dist.is_empty() {
        return None;
    }
    dist.sort_by(|a, b| a.total_cmp(b));

    let mut best_r = 0.0_f64;
    let mut best_count = 0usize;
    let mut start = 0usize;

    let mut close_bin = |start: usize, end: usize| {
        let count = end - start;
        let r = dist[(start + end) / 2];
        if count as f64 * best_r >= best_count as f64 * r
            || (best_r < f64::EPSILON && count >= best_count)
        {
            best_r = r;
            best_count = count;
        }
    };

    for i in 1..dist.len() {
        if dist[i] - dist[start] > bin {
            close_bin(start, i);
            start = i;
        }
    }
    close_bin(start, dist.len());

    Some((best_r, best_count))
}
