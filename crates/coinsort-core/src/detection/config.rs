use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANNY_HIGH_THRESHOLD, DEFAULT_HOUGH_ACC_THRESHOLD, DEFAULT_HOUGH_DP,
    DEFAULT_HOUGH_MIN_DIST, DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, DEFAULT_VOTE_SIGMA,
};
use crate::error::{CoinError, Result};

/// Parameters of the gradient Hough circle transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughParams {
    /// Inverse ratio of accumulator resolution to image resolution.
    #[serde(default = "default_dp")]
    pub dp: f64,
    /// Minimum distance between accepted centers, in pixels.
    #[serde(default = "default_min_dist")]
    pub min_dist: f64,
    /// Upper Canny threshold. The lower threshold is half of it.
    #[serde(default = "default_canny_high")]
    pub canny_high: f64,
    /// Votes required for a center, and edge support required for its radius.
    #[serde(default = "default_acc_threshold")]
    pub acc_threshold: u32,
    #[serde(default = "default_min_radius")]
    pub min_radius: i32,
    #[serde(default = "default_max_radius")]
    pub max_radius: i32,
    /// Blur applied to the field before computing vote directions. Zero
    /// votes along the raw Sobel gradient.
    #[serde(default = "default_vote_sigma")]
    pub vote_sigma: f64,
}

fn default_dp() -> f64 {
    DEFAULT_HOUGH_DP
}
fn default_min_dist() -> f64 {
    DEFAULT_HOUGH_MIN_DIST
}
fn default_canny_high() -> f64 {
    DEFAULT_CANNY_HIGH_THRESHOLD
}
fn default_acc_threshold() -> u32 {
    DEFAULT_HOUGH_ACC_THRESHOLD
}
fn default_min_radius() -> i32 {
    DEFAULT_MIN_RADIUS
}
fn default_max_radius() -> i32 {
    DEFAULT_MAX_RADIUS
}
fn default_vote_sigma() -> f64 {
    DEFAULT_VOTE_SIGMA
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            dp: DEFAULT_HOUGH_DP,
            min_dist: DEFAULT_HOUGH_MIN_DIST,
            canny_high: DEFAULT_CANNY_HIGH_THRESHOLD,
            acc_threshold: DEFAULT_HOUGH_ACC_THRESHOLD,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            vote_sigma: DEFAULT_VOTE_SIGMA,
        }
    }
}

impl HoughParams {
    pub fn canny_low(&self) -> f64 {
        self.canny_high / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.dp.is_finite() && self.dp > 0.0) {
            return Err(CoinError::InvalidConfig(format!(
                "dp must be positive, got {}",
                self.dp
            )));
        }
        if self.min_dist < 0.0 || self.canny_high < 0.0 {
            return Err(CoinError::InvalidConfig(
                "min_dist and canny_high must be non-negative".into(),
            ));
        }
        if !(self.vote_sigma.is_finite() && self.vote_sigma >= 0.0) {
            return Err(CoinError::InvalidConfig(format!(
                "vote_sigma must be non-negative, got {}",
                self.vote_sigma
            )));
        }
        if self.min_radius < 1 || self.max_radius < self.min_radius {
            return Err(CoinError::InvalidConfig(format!(
                "radius range [{}, {}] is empty",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}
