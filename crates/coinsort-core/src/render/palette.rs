use image::Rgb;

use crate::classify::Denomination;

/// Color for anything without a palette entry.
pub const UNKNOWN_COLOR: Rgb<u8> = Rgb([255, 0, 255]);

/// Annotation colors, in RGB order as drawn.
pub const PALETTE: [(Denomination, Rgb<u8>); 4] = [
    (Denomination::HalfZloty, Rgb([0, 255, 0])),
    (Denomination::OneZloty, Rgb([0, 0, 255])),
    (Denomination::TwoZloty, Rgb([255, 0, 0])),
    (Denomination::FiveZloty, Rgb([128, 107, 59])),
];

pub fn color_for(denomination: Denomination) -> Rgb<u8> {
    PALETTE
        .iter()
        .find(|(d, _)| *d == denomination)
        .map(|(_, c)| *c)
        .unwrap_or(UNKNOWN_COLOR)
}
