// Host-side tests for constants, configuration defaults, and their
// relationships.

use starfield::config::StarfieldConfig;
use starfield::constants::*;
use starfield::field::Palette;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_gains_cannot_overshoot() {
    // A lerp gain in (0, 1) is a weighted average of current and target
    assert!(ROTATION_GAIN > 0.0 && ROTATION_GAIN < 1.0);
    assert!(CAMERA_GAIN > 0.0 && CAMERA_GAIN < 1.0);
    assert!(POINTER_SENSITIVITY > 0.0);
    assert!(SCROLL_SENSITIVITY > 0.0);
    assert!(Z_DRIFT_PER_FRAME > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(SPAN_Y > SPAN_X && SPAN_X > SPAN_Z);
    assert!(COLOR_UPPER_THRESHOLD > COLOR_LOWER_THRESHOLD);
    assert!(COLOR_LOWER_THRESHOLD > 0.0 && COLOR_UPPER_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_material_are_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(POINT_SIZE > 0.0);
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
    assert!(FOG_DENSITY >= 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    // WebGPU only guarantees 1x and 4x multisampling
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
fn config_defaults_come_from_constants() {
    let c = StarfieldConfig::default();
    assert_eq!(c.particle_count, PARTICLE_COUNT);
    assert_eq!(c.seed, None);
    assert_eq!(c.max_pixel_ratio, MAX_PIXEL_RATIO);
    assert_eq!(c.palette, Palette::default());
}

#[test]
fn pixel_ratio_is_clamped() {
    let c = StarfieldConfig::default();
    assert_eq!(c.pixel_ratio(1.0), 1.0);
    assert_eq!(c.pixel_ratio(1.5), 1.5);
    assert_eq!(c.pixel_ratio(3.0), 2.0);
    assert_eq!(c.with_max_pixel_ratio(1.0).pixel_ratio(3.0), 1.0);
}

#[test]
fn seeded_config_builds_a_reproducible_field() {
    let c = StarfieldConfig::default()
        .with_particle_count(64)
        .with_seed(99);
    let a = c.build_field();
    let b = c.build_field();
    assert_eq!(a.len(), 64);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
}
