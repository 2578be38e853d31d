//! Integration tests for colors module

use palette::{Hsv as PaletteHsv, Srgb};
use pwm_hue::colors::{self, Hsv, hsv_to_rgb};

fn channel_distance(a: Srgb<u8>, b: Srgb<u8>) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}

#[test]
fn hsv_creates_primary_colors() {
    assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Srgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Srgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Srgb::new(0, 0, 255));
}

#[test]
fn hsv_creates_yellow_at_sixty_degrees() {
    assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), Srgb::new(255, 255, 0));
}

#[test]
fn zero_saturation_depends_only_on_value() {
    for value in [0.0, 20.0, 50.0, 80.0, 100.0] {
        let expected = libm::roundf(value / 100.0 * 255.0) as u8;
        for hue in (0..360).step_by(15) {
            let gray = hsv_to_rgb(hue as f32, 0.0, value);
            assert_eq!(gray, Srgb::new(expected, expected, expected));
        }
    }

    // Half value rounds up
    assert_eq!(hsv_to_rgb(200.0, 0.0, 50.0), Srgb::new(128, 128, 128));
}

#[test]
fn hue_is_periodic() {
    for hue in 0..360 {
        let h = hue as f32;
        assert_eq!(hsv_to_rgb(h, 80.0, 80.0), hsv_to_rgb(h + 360.0, 80.0, 80.0));
        assert_eq!(hsv_to_rgb(h, 80.0, 80.0), hsv_to_rgb(h - 360.0, 80.0, 80.0));
    }
}

#[test]
fn hue_wraps_around_360() {
    assert_eq!(colors::hue(360.0), colors::hue(0.0));
    assert_eq!(colors::hue(720.0), colors::hue(0.0));
    assert_eq!(colors::hue(-0.000_001), colors::hue(0.0));
}

#[test]
fn adjacent_sectors_agree_at_boundaries() {
    for boundary in [60.0, 120.0, 180.0, 240.0, 300.0, 360.0] {
        let at = hsv_to_rgb(boundary, 100.0, 100.0);
        let before = hsv_to_rgb(boundary - 0.001, 100.0, 100.0);
        assert!(
            channel_distance(at, before) <= 1,
            "discontinuity at {}: {:?} vs {:?}",
            boundary,
            before,
            at
        );
    }
}

#[test]
fn output_is_continuous_across_the_wheel() {
    let mut previous = hsv_to_rgb(0.0, 80.0, 80.0);
    for tenth in 1..=3600 {
        let current = hsv_to_rgb(tenth as f32 / 10.0, 80.0, 80.0);
        assert!(channel_distance(previous, current) <= 2);
        previous = current;
    }
}

#[test]
fn hand_computed_reference_frame() {
    // Sector 0, dh = 0, v = 0.8, p = v * 0.2, t = v * (1 - 0.8 * (1 - 1/60))
    let v: f32 = 0.8;
    let p = v * 0.2;
    let t = v * (1.0 - 0.8 * (1.0 - 1.0 / 60.0));
    let expected = Srgb::new(
        libm::roundf(v * 255.0) as u8,
        libm::roundf(t * 255.0) as u8,
        libm::roundf(p * 255.0) as u8,
    );

    assert_eq!(hsv_to_rgb(1.0, 80.0, 80.0), expected);
    assert_eq!(expected, Srgb::new(204, 44, 41));
}

#[test]
fn out_of_range_inputs_are_clamped() {
    assert_eq!(hsv_to_rgb(0.0, 150.0, 100.0), hsv_to_rgb(0.0, 100.0, 100.0));
    assert_eq!(hsv_to_rgb(0.0, 100.0, 250.0), Srgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(90.0, -5.0, -5.0), Srgb::new(0, 0, 0));
}

#[test]
fn hsv_struct_converts_through_from() {
    let rgb: Srgb<u8> = Hsv::new(240.0, 100.0, 100.0).into();
    assert_eq!(rgb, Srgb::new(0, 0, 255));
}

#[test]
fn palette_hsv_uses_unit_scale() {
    let rgb = colors::from_palette(PaletteHsv::new(120.0, 1.0, 1.0));
    assert_eq!(rgb, Srgb::new(0, 255, 0));

    let rgb = colors::from_palette(PaletteHsv::new(-120.0, 0.8, 0.8));
    assert_eq!(rgb, hsv_to_rgb(240.0, 80.0, 80.0));
}
