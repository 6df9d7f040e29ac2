use std::f64::consts::PI;

use image::{Rgb, RgbImage};

use coinsort_core::sampling::{
    clamp_rect, sample_center, sample_disc, sample_ring, PixelRect, SamplingConfig,
};

fn gray_image(w: u32, h: u32, v: u8) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb([v, v, v]))
}

// ---------------------------------------------------------------------------
// clamp_rect
// ---------------------------------------------------------------------------

#[test]
fn test_clamp_rect_inside_is_unchanged() {
    let r = PixelRect::square(50, 50, 10);
    assert_eq!(clamp_rect((100, 100), r), r);
}

#[test]
fn test_clamp_rect_top_left_overflow() {
    let r = clamp_rect((100, 80), PixelRect::square(5, 3, 10));
    assert_eq!(
        r,
        PixelRect {
            x: 0,
            y: 0,
            width: 15,
            height: 13
        }
    );
}

#[test]
fn test_clamp_rect_bottom_right_overflow() {
    let r = clamp_rect((100, 80), PixelRect::square(95, 75, 10));
    assert_eq!(
        r,
        PixelRect {
            x: 85,
            y: 65,
            width: 15,
            height: 15
        }
    );
}

#[test]
fn test_clamp_rect_disjoint_is_empty() {
    let r = clamp_rect((100, 80), PixelRect::square(300, 300, 10));
    assert!(r.is_empty());
    let r = clamp_rect((100, 80), PixelRect::square(-50, 10, 10));
    assert!(r.is_empty());
}

// ---------------------------------------------------------------------------
// sample_disc / sample_center / sample_ring
// ---------------------------------------------------------------------------

#[test]
fn test_disc_pixel_count_matches_area() {
    let image = gray_image(200, 200, 100);
    for r in [10, 30, 60] {
        let region = sample_disc(&image, 100, 100, r);
        assert_eq!(region.pixels.dimensions(), (2 * r as u32, 2 * r as u32));
        assert_eq!(region.mask.dim(), (2 * r as usize, 2 * r as usize));
        let expected = PI * (r * r) as f64;
        let count = region.inside_count() as f64;
        assert!(
            (count - expected).abs() <= 2.0 * PI * r as f64,
            "r={r}: {count} vs {expected}"
        );
    }
}

#[test]
fn test_disc_zeroes_outside_pixels() {
    let image = gray_image(100, 100, 100);
    let region = sample_disc(&image, 50, 50, 20);
    // Box corner is outside the disc, box center is inside.
    assert_eq!(region.pixels.get_pixel(0, 0).0, [0, 0, 0]);
    assert!(!region.mask[[0, 0]]);
    assert_eq!(region.pixels.get_pixel(20, 20).0, [100, 100, 100]);
    assert!(region.mask[[20, 20]]);
}

#[test]
fn test_center_sample_uses_fraction_of_radius() {
    let image = gray_image(300, 300, 100);
    let region = sample_center(&image, 150, 150, 120, 0.1);
    assert_eq!(region.pixels.dimensions(), (24, 24));
    assert_eq!(region.rect, PixelRect::square(150, 150, 12));

    // round(0.1 * 125) = 13 (12.5 rounds away from zero)
    let region = sample_center(&image, 150, 150, 125, 0.1);
    assert_eq!(region.pixels.width(), 26);
}

#[test]
fn test_tiny_center_sample_is_empty() {
    let image = gray_image(50, 50, 100);
    let region = sample_center(&image, 25, 25, 4, 0.1);
    assert_eq!(region.inside_count(), 0);
}

#[test]
fn test_ring_is_band_inside_boundary() {
    let image = gray_image(200, 200, 100);
    let r = 60;
    let ring = sample_ring(&image, 100, 100, r, 20);

    // Center of the coin is not part of the ring; a pixel 5 px inside the
    // boundary is.
    assert!(!ring.mask[[r as usize, r as usize]]);
    assert!(ring.mask[[r as usize, (2 * r - 5) as usize]]);
    // 15 px inside the boundary is outside the 10 px inner half-band.
    assert!(!ring.mask[[r as usize, (2 * r - 15) as usize]]);

    let expected = PI * ((r * r) as f64 - 50.0 * 50.0);
    let count = ring.inside_count() as f64;
    assert!(
        (count - expected).abs() <= 2.0 * PI * r as f64,
        "{count} vs {expected}"
    );
}

#[test]
fn test_ring_is_subset_of_disc() {
    let image = gray_image(200, 200, 100);
    let disc = sample_disc(&image, 90, 110, 40);
    let ring = sample_ring(&image, 90, 110, 40, 20);
    for (inside_ring, inside_disc) in ring.mask.iter().zip(disc.mask.iter()) {
        assert!(!inside_ring || *inside_disc);
    }
}

#[test]
fn test_border_circle_yields_shifted_smaller_region() {
    let image = gray_image(100, 100, 100);
    let full = sample_disc(&image, 50, 50, 30);
    let clipped = sample_disc(&image, 10, 10, 30);

    assert_eq!(clipped.rect, PixelRect { x: 0, y: 0, width: 40, height: 40 });
    assert!(clipped.inside_count() < full.inside_count());
    // The mask stays centered on local (30, 30), not on the coin at (10, 10).
    assert!(clipped.mask[[30, 30]]);
    assert!(!clipped.mask[[0, 0]]);
}

#[test]
fn test_sampling_config_defaults_and_validation() {
    let config = SamplingConfig::default();
    assert_eq!(config.center_fraction, 0.1);
    assert_eq!(config.ring_thickness, 20);
    assert!(config.validate().is_ok());

    let bad = SamplingConfig {
        center_fraction: 0.0,
        ..Default::default()
    };
    assert!(bad.validate().is_err());
    let bad = SamplingConfig {
        ring_thickness: 0,
        ..Default::default()
    };
    assert!(bad.validate().is_err());
}
