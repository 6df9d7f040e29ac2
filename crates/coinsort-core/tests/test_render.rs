use image::{Rgb, RgbImage};

use coinsort_core::classify::{Decision, Denomination};
use coinsort_core::frame::Circle;
use coinsort_core::render::palette::{color_for, UNKNOWN_COLOR};
use coinsort_core::render::text::{draw_label_mut, format_value};
use coinsort_core::render::{render, replay, Canvas, DrawCommand};

fn decision(d: Denomination) -> Decision {
    d.into()
}

#[test]
fn test_skip_draws_nothing() {
    let original = RgbImage::from_pixel(200, 200, Rgb([90, 90, 90]));
    let mut canvas = Canvas::new(&original);
    let drawn = render(&mut canvas, &Circle::new(100, 100, 40), &Decision::skip());
    assert!(!drawn);
    assert_eq!(canvas.output, original);
    assert_eq!(canvas.overlay, original);
}

#[test]
fn test_outline_uses_palette_color() {
    let original = RgbImage::new(200, 200);
    let mut canvas = Canvas::new(&original);
    assert!(render(
        &mut canvas,
        &Circle::new(100, 100, 40),
        &decision(Denomination::HalfZloty)
    ));
    let output = canvas.into_output();
    // Left and top of the ring; the label sits right of center.
    assert_eq!(*output.get_pixel(60, 100), Rgb([0, 255, 0]));
    assert_eq!(*output.get_pixel(100, 60), Rgb([0, 255, 0]));
    // Well outside the outline nothing changes.
    assert_eq!(*output.get_pixel(5, 5), Rgb([0, 0, 0]));
}

#[test]
fn test_disc_interior_is_blended() {
    let original = RgbImage::new(200, 200);
    let mut canvas = Canvas::new(&original);
    render(
        &mut canvas,
        &Circle::new(100, 100, 40),
        &decision(Denomination::HalfZloty),
    );
    // 0.25 * 255 + 0.75 * 0 = 63.75
    assert_eq!(*canvas.output.get_pixel(100, 120), Rgb([0, 64, 0]));
    assert_eq!(*canvas.overlay.get_pixel(100, 120), Rgb([0, 255, 0]));
}

#[test]
fn test_label_is_drawn_in_black() {
    let original = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
    let mut canvas = Canvas::new(&original);
    render(
        &mut canvas,
        &Circle::new(100, 100, 40),
        &decision(Denomination::FiveZloty),
    );
    let black = (66..=104)
        .flat_map(|y| (78..=150).map(move |x| (x, y)))
        .filter(|&(x, y)| *canvas.output.get_pixel(x, y) == Rgb([0, 0, 0]))
        .count();
    assert!(black > 20, "only {black} label pixels");
}

#[test]
fn test_replay_counts_drawn_commands() {
    let original = RgbImage::new(300, 200);
    let mut canvas = Canvas::new(&original);
    let commands = vec![
        DrawCommand {
            circle: Circle::new(70, 100, 50),
            decision: decision(Denomination::OneZloty),
        },
        DrawCommand {
            circle: Circle::new(230, 100, 50),
            decision: Decision::skip(),
        },
    ];
    assert_eq!(replay(&mut canvas, &commands), 1);
    // The skipped circle leaves its area untouched.
    assert_eq!(*canvas.output.get_pixel(230, 130), Rgb([0, 0, 0]));
    assert_eq!(*canvas.output.get_pixel(70, 130), Rgb([0, 0, 64]));
}

#[test]
fn test_palette() {
    assert_eq!(color_for(Denomination::HalfZloty), Rgb([0, 255, 0]));
    assert_eq!(color_for(Denomination::OneZloty), Rgb([0, 0, 255]));
    assert_eq!(color_for(Denomination::TwoZloty), Rgb([255, 0, 0]));
    assert_eq!(color_for(Denomination::FiveZloty), Rgb([128, 107, 59]));
    assert_eq!(color_for(Denomination::Skip), UNKNOWN_COLOR);
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(0.5), "0.5");
    assert_eq!(format_value(1.0), "1.0");
    assert_eq!(format_value(2.0), "2.0");
    assert_eq!(format_value(5.0), "5.0");
}

#[test]
fn test_label_sits_on_baseline() {
    let mut img = RgbImage::from_pixel(120, 80, Rgb([255, 255, 255]));
    draw_label_mut(&mut img, "1.0", (10, 50), 36.0, Rgb([0, 0, 0]));
    let inked: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 != [255, 255, 255])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!inked.is_empty());
    // Digits rest on the baseline and start at the origin.
    assert!(inked.iter().all(|&(x, y)| x >= 10 && y <= 51));
    assert!(inked.iter().any(|&(_, y)| y >= 45));
}

#[test]
fn test_label_clipped_at_border() {
    let mut img = RgbImage::from_pixel(30, 30, Rgb([255, 255, 255]));
    draw_label_mut(&mut img, "5.0", (-10, 5), 36.0, Rgb([0, 0, 0]));
    draw_label_mut(&mut img, "2.0", (20, 40), 36.0, Rgb([0, 0, 0]));
    assert_eq!(img.dimensions(), (30, 30));
}
