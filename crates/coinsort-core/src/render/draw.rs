use image::{Rgb, RgbImage};

/// `output = round(alpha * overlay + (1 - alpha) * output)`, per channel.
pub fn blend_into(output: &mut RgbImage, overlay: &RgbImage, alpha: f64) {
    debug_assert_eq!(output.dimensions(), overlay.dimensions());
    for (dst, src) in output.pixels_mut().zip(overlay.pixels()) {
        for ch in 0..3 {
            let v = alpha * src.0[ch] as f64 + (1.0 - alpha) * dst.0[ch] as f64;
            dst.0[ch] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Circle outline of the given thickness, centered on `radius`.
pub fn draw_thick_circle_mut(
    img: &mut RgbImage,
    center: (i32, i32),
    radius: i32,
    thickness: i32,
    color: Rgb<u8>,
) {
    let (w, h) = img.dimensions();
    let half = thickness as f64 / 2.0;
    let inner = (radius as f64 - half).max(0.0);
    let outer = radius as f64 + half;
    let (inner_sq, outer_sq) = (inner * inner, outer * outer);
    let reach = outer.ceil() as i64;

    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let x0 = (cx - reach).max(0);
    let x1 = (cx + reach).min(w as i64 - 1);
    let y0 = (cy - reach).max(0);
    let y1 = (cy + reach).min(h as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d_sq = ((x - cx).pow(2) + (y - cy).pow(2)) as f64;
            if d_sq >= inner_sq && d_sq <= outer_sq {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
