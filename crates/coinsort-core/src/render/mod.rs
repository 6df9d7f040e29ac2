pub mod draw;
pub mod palette;
pub mod text;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::classify::Decision;
use crate::consts::{LABEL_FONT_SIZE, OUTLINE_THICKNESS, OVERLAY_ALPHA};
use crate::frame::Circle;

use self::draw::{blend_into, draw_thick_circle_mut};
use self::palette::color_for;
use self::text::{draw_label_mut, format_value};

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Output accumulator and the overlay layer blended into it.
///
/// Both start as copies of the original image. The overlay keeps every disc
/// drawn so far, so each blend also re-applies earlier discs.
#[derive(Clone, Debug)]
pub struct Canvas {
    pub output: RgbImage,
    pub overlay: RgbImage,
}

impl Canvas {
    pub fn new(original: &RgbImage) -> Self {
        Self {
            output: original.clone(),
            overlay: original.clone(),
        }
    }

    pub fn into_output(self) -> RgbImage {
        self.output
    }
}

/// One deferred annotation, produced per circle and replayed in order.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub circle: Circle,
    pub decision: Decision,
}

/// Annotate one classified circle. Returns `false` (and draws nothing) for
/// a skip decision.
pub fn render(canvas: &mut Canvas, circle: &Circle, decision: &Decision) -> bool {
    if decision.is_skip() {
        return false;
    }
    let color = color_for(decision.denomination);
    let center = (circle.center_x, circle.center_y);

    draw_filled_circle_mut(&mut canvas.overlay, center, circle.radius, color);
    blend_into(&mut canvas.output, &canvas.overlay, OVERLAY_ALPHA);
    draw_thick_circle_mut(
        &mut canvas.output,
        center,
        circle.radius,
        OUTLINE_THICKNESS,
        color,
    );

    let origin_x = (circle.center_x as f64 - circle.radius as f64 / 2.0) as i32;
    draw_label_mut(
        &mut canvas.output,
        &format_value(decision.value),
        (origin_x, circle.center_y),
        LABEL_FONT_SIZE,
        LABEL_COLOR,
    );
    true
}

/// Replay draw commands serially, in the order given. Returns how many
/// were actually drawn.
pub fn replay(canvas: &mut Canvas, commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|cmd| render(canvas, &cmd.circle, &cmd.decision))
        .count()
}
