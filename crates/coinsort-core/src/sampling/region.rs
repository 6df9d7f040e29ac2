use image::{Rgb, RgbImage};
use ndarray::Array2;

/// A rectangle in signed image coordinates. May extend past the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Half-open square `[cy - r, cy + r) x [cx - r, cx + r)`.
    pub fn square(cx: i32, cy: i32, r: i32) -> Self {
        Self {
            x: cx - r,
            y: cy - r,
            width: 2 * r,
            height: 2 * r,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Intersect `requested` with an image of `(width, height)`.
///
/// Parts outside the image are dropped, the way slicing clamps; a rectangle
/// that misses the image entirely comes back with zero size.
pub fn clamp_rect(bounds: (u32, u32), requested: PixelRect) -> PixelRect {
    let (w, h) = (bounds.0 as i64, bounds.1 as i64);
    let x0 = (requested.x as i64).clamp(0, w);
    let y0 = (requested.y as i64).clamp(0, h);
    let x1 = (requested.x as i64 + requested.width.max(0) as i64).clamp(x0, w);
    let y1 = (requested.y as i64 + requested.height.max(0) as i64).clamp(y0, h);
    PixelRect {
        x: x0 as i32,
        y: y0 as i32,
        width: (x1 - x0) as i32,
        height: (y1 - y0) as i32,
    }
}

/// A cropped pixel grid with an explicit inside/outside mask.
///
/// Outside pixels are also zeroed in `pixels`, so the region can be saved
/// and inspected as an ordinary image.
#[derive(Clone, Debug)]
pub struct Region {
    pub pixels: RgbImage,
    /// Shape = (height, width); `true` marks a sample pixel.
    pub mask: Array2<bool>,
    /// Where the crop actually starts in the source image.
    pub rect: PixelRect,
}

impl Region {
    fn crop(image: &RgbImage, requested: PixelRect) -> Self {
        let rect = clamp_rect(image.dimensions(), requested);
        let (w, h) = (rect.width as u32, rect.height as u32);
        let pixels = RgbImage::from_fn(w, h, |col, row| {
            *image.get_pixel(rect.x as u32 + col, rect.y as u32 + row)
        });
        Self {
            pixels,
            mask: Array2::from_elem((h as usize, w as usize), true),
            rect,
        }
    }

    /// Keep only pixels for which `keep(dx, dy)` holds, where `(dx, dy)` is
    /// the offset from local point `(r, r)` of the crop.
    fn retain(&mut self, r: i32, keep: impl Fn(i64, i64) -> bool) {
        let (h, w) = self.mask.dim();
        for row in 0..h {
            for col in 0..w {
                let dx = col as i64 - r as i64;
                let dy = row as i64 - r as i64;
                if self.mask[[row, col]] && !keep(dx, dy) {
                    self.mask[[row, col]] = false;
                    self.pixels.put_pixel(col as u32, row as u32, Rgb([0, 0, 0]));
                }
            }
        }
    }

    /// Number of pixels inside the mask.
    pub fn inside_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Iterate over the RGB values of inside pixels.
    pub fn inside_pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.mask
            .indexed_iter()
            .filter(|(_, &inside)| inside)
            .map(|((row, col), _)| self.pixels.get_pixel(col as u32, row as u32).0)
    }
}

/// Crop the box around `(cx, cy)` and mask it to a filled disc of radius `r`.
///
/// The mask is centered on local `(r, r)` of the clamped crop. Near the
/// image border the crop shrinks and the disc ends up shifted relative to
/// the coin.
pub fn sample_disc(image: &RgbImage, cx: i32, cy: i32, r: i32) -> Region {
    let mut region = Region::crop(image, PixelRect::square(cx, cy, r));
    let r_sq = r as i64 * r as i64;
    region.retain(r, |dx, dy| dx * dx + dy * dy <= r_sq);
    region
}

/// Small disc around `(cx, cy)` with radius `round(fraction * r)`.
pub fn sample_center(image: &RgbImage, cx: i32, cy: i32, r: i32, fraction: f64) -> Region {
    let center_r = (fraction * r as f64).round() as i32;
    sample_disc(image, cx, cy, center_r)
}

/// Rim of the disc: pixels of an outline of `thickness` drawn on the disc
/// boundary, intersected with the disc itself.
pub fn sample_ring(image: &RgbImage, cx: i32, cy: i32, r: i32, thickness: i32) -> Region {
    let mut region = sample_disc(image, cx, cy, r);
    let inner = (r as f64 - thickness as f64 / 2.0).max(0.0);
    let inner_sq = inner * inner;
    region.retain(r, |dx, dy| (dx * dx + dy * dy) as f64 >= inner_sq);
    region
}
