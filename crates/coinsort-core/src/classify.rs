use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores below this on either sample mean the object is not a coin.
pub const SKIP_THRESHOLD: f64 = 50.0;

/// Splits low-divergence (silver) from high-divergence (golden) samples.
pub const SPLIT_THRESHOLD: f64 = 120.0;

/// Face value assigned to a detected coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    Skip,
    HalfZloty,
    OneZloty,
    TwoZloty,
    FiveZloty,
}

impl Denomination {
    pub const ALL: [Denomination; 5] = [
        Self::Skip,
        Self::HalfZloty,
        Self::OneZloty,
        Self::TwoZloty,
        Self::FiveZloty,
    ];

    /// Monetary value; `-1.0` for [`Denomination::Skip`].
    pub fn value(self) -> f64 {
        match self {
            Self::Skip => -1.0,
            Self::HalfZloty => 0.50,
            Self::OneZloty => 1.00,
            Self::TwoZloty => 2.00,
            Self::FiveZloty => 5.00,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Skip => "Skip image",
            Self::HalfZloty => "0.50 PLN",
            Self::OneZloty => "1 PLN",
            Self::TwoZloty => "2 PLN",
            Self::FiveZloty => "5 PLN",
        }
    }

    pub fn is_skip(self) -> bool {
        self == Self::Skip
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification outcome for one circle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub denomination: Denomination,
    pub label: String,
    pub value: f64,
}

impl From<Denomination> for Decision {
    fn from(denomination: Denomination) -> Self {
        Self {
            denomination,
            label: denomination.label().to_string(),
            value: denomination.value(),
        }
    }
}

impl Decision {
    pub fn skip() -> Self {
        Denomination::Skip.into()
    }

    pub fn is_skip(&self) -> bool {
        self.denomination.is_skip()
    }
}

/// Map the center and ring divergence scores to a denomination.
///
/// Rules are checked top to bottom, first match wins:
///   either score < 50            -> skip
///   center < 120, ring < 120     -> 1 PLN
///   center < 120, ring >= 120    -> 2 PLN
///   center >= 120, ring < 120    -> 5 PLN
///   otherwise                    -> 0.50 PLN
pub fn classify(center_score: f64, ring_score: f64) -> Denomination {
    if center_score < SKIP_THRESHOLD || ring_score < SKIP_THRESHOLD {
        return Denomination::Skip;
    }
    match (center_score < SPLIT_THRESHOLD, ring_score < SPLIT_THRESHOLD) {
        (true, true) => Denomination::OneZloty,
        (true, false) => Denomination::TwoZloty,
        (false, true) => Denomination::FiveZloty,
        (false, false) => Denomination::HalfZloty,
    }
}

/// [`classify`] wrapped into a [`Decision`].
pub fn make_decision(center_score: f64, ring_score: f64) -> Decision {
    classify(center_score, ring_score).into()
}
