use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use tracing::warn;

static FONT_BYTES: &[u8] = include_bytes!("../../fonts/DejaVuSans-Bold.ttf");

/// Format a coin value the way the labels show it: `0.5`, `1.0`, `2.0`.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Draw `text` with its baseline-left corner at `origin`, `size` pixels high.
///
/// Glyphs falling outside the image are clipped.
pub fn draw_label_mut(
    img: &mut RgbImage,
    text: &str,
    origin: (i32, i32),
    size: f32,
    color: Rgb<u8>,
) {
    let font = match FontRef::try_from_slice(FONT_BYTES) {
        Ok(font) => font,
        Err(e) => {
            warn!(error = %e, "Label font unavailable, skipping label");
            return;
        }
    };
    let scale = PxScale::from(size);
    // draw_text_mut positions the top of the line box, not the baseline.
    let ascent = font.as_scaled(scale).ascent();
    let top = origin.1 - ascent.round() as i32;
    draw_text_mut(img, color, origin.0, top, scale, &font, text);
}
