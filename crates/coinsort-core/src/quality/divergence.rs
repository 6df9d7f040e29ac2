use serde::{Deserialize, Serialize};

use crate::consts::MAX_DIVERGENCE;
use crate::error::{CoinError, Result};
use crate::sampling::Region;

/// Which pixels of a region count as background for scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundRule {
    /// Only pixels outside the region mask.
    #[default]
    Mask,
    /// Outside the mask, plus any pixel whose three channels are all zero.
    MaskAndBlack,
}

/// `|p - q| + |p - t| + |t - q|` for one pixel, in `[0, 510]`.
pub fn pixel_divergence([p, q, t]: [u8; 3]) -> u32 {
    let (p, q, t) = (p as i32, q as i32, t as i32);
    ((p - q).abs() + (p - t).abs() + (t - q).abs()) as u32
}

/// Mean channel divergence over the sample pixels of `region`.
///
/// Fails with [`CoinError::EmptyRegion`] when no pixel qualifies.
pub fn channel_divergence(region: &Region, rule: BackgroundRule) -> Result<f64> {
    let mut sum = 0u64;
    let mut count = 0u64;

    for pixel in region.inside_pixels() {
        if rule == BackgroundRule::MaskAndBlack && pixel == [0, 0, 0] {
            continue;
        }
        sum += pixel_divergence(pixel) as u64;
        count += 1;
    }

    if count == 0 {
        return Err(CoinError::EmptyRegion);
    }
    let mean = sum as f64 / count as f64;
    debug_assert!(mean <= MAX_DIVERGENCE);
    Ok(mean)
}
