// Host-side tests for orientation normalization.

use level_core::{
    normalize, screen_tilt, LevelError, NormalizedOffset, OrientationSample, ScreenOrientation,
};

const MODES: [ScreenOrientation; 5] = [
    ScreenOrientation::LandscapePrimary,
    ScreenOrientation::LandscapeSecondary,
    ScreenOrientation::PortraitPrimary,
    ScreenOrientation::PortraitSecondary,
    ScreenOrientation::Unknown,
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn level_device_is_centered_in_every_mode() {
    init_logger();
    let flat = OrientationSample::new(123.0, 0.0, 0.0);
    for mode in MODES {
        assert_eq!(normalize(Some(&flat), mode), NormalizedOffset::CENTER, "{mode}");
    }
}

#[test]
fn missing_sample_is_centered() {
    assert_eq!(
        normalize(None, ScreenOrientation::LandscapePrimary),
        NormalizedOffset::CENTER
    );
}

#[test]
fn axis_mapping_per_mode() {
    init_logger();
    let s = OrientationSample::new(0.0, 10.0, 20.0);
    assert_eq!(screen_tilt(&s, ScreenOrientation::LandscapePrimary), (-10.0, -20.0));
    assert_eq!(screen_tilt(&s, ScreenOrientation::LandscapeSecondary), (10.0, 20.0));
    assert_eq!(screen_tilt(&s, ScreenOrientation::PortraitSecondary), (20.0, -10.0));
    assert_eq!(screen_tilt(&s, ScreenOrientation::PortraitPrimary), (-20.0, 10.0));
    assert_eq!(screen_tilt(&s, ScreenOrientation::Unknown), (-20.0, 10.0));
}

#[test]
fn normalization_scales_by_ninety_degrees() {
    let s = OrientationSample::new(0.0, 45.0, -9.0);
    let o = normalize(Some(&s), ScreenOrientation::LandscapeSecondary);
    assert!((o.x - 1.0).abs() < 1e-12);
    assert!((o.y - 0.4).abs() < 1e-12);
}

#[test]
fn output_is_clamped_for_any_finite_input() {
    init_logger();
    let angles = [-1e9, -360.0, -180.0, -91.0, -45.0, 0.0, 33.3, 90.0, 179.9, 1e9];
    for mode in MODES {
        for &beta in &angles {
            for &gamma in &angles {
                let o = normalize(Some(&OrientationSample::new(0.0, beta, gamma)), mode);
                assert!((0.0..=1.0).contains(&o.x), "x={} for {beta},{gamma} {mode}", o.x);
                assert!((0.0..=1.0).contains(&o.y), "y={} for {beta},{gamma} {mode}", o.y);
            }
        }
    }
}

#[test]
fn nan_axis_falls_back_to_center() {
    let s = OrientationSample::new(0.0, f64::NAN, 90.0);
    let o = normalize(Some(&s), ScreenOrientation::LandscapeSecondary);
    assert_eq!(o.x, 0.5);
    assert_eq!(o.y, 1.0);
}

#[test]
fn sample_from_nullable_fields() {
    assert_eq!(
        OrientationSample::from_optional(None, Some(1.0), Some(2.0)),
        Some(OrientationSample::new(0.0, 1.0, 2.0))
    );
    assert_eq!(OrientationSample::from_optional(Some(3.0), None, Some(2.0)), None);
    assert_eq!(OrientationSample::from_optional(Some(3.0), Some(1.0), None), None);
}

#[test]
fn screen_orientation_parsing() {
    assert_eq!(
        "landscape-primary".parse::<ScreenOrientation>(),
        Ok(ScreenOrientation::LandscapePrimary)
    );
    assert_eq!(
        "portrait-secondary".parse::<ScreenOrientation>(),
        Ok(ScreenOrientation::PortraitSecondary)
    );
    assert_eq!(
        "sideways".parse::<ScreenOrientation>(),
        Err(LevelError::UnknownOrientation("sideways".into()))
    );
    assert_eq!(ScreenOrientation::from_dom(None), ScreenOrientation::Unknown);
    assert_eq!(ScreenOrientation::from_dom(Some("bogus")), ScreenOrientation::Unknown);
    for mode in &MODES[..4] {
        assert_eq!(ScreenOrientation::from_dom(Some(mode.as_str())), *mode);
    }
}

#[test]
fn portrait_detection() {
    assert!(ScreenOrientation::PortraitPrimary.is_portrait());
    assert!(ScreenOrientation::PortraitSecondary.is_portrait());
    assert!(!ScreenOrientation::LandscapePrimary.is_portrait());
    assert!(!ScreenOrientation::Unknown.is_portrait());
}
