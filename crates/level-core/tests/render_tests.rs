// Host-side tests for the render adapter using a recording target.

use level_core::{
    apply_rotor, apply_transform, compute_layout, BubbleTransform, LevelTargets,
    NormalizedOffset, RenderTarget, RotorTransform, Vector2, Viewport,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct Recorded {
    offset: Option<(f64, f64)>,
    scale: Option<Vector2>,
    rotation: Option<f64>,
    writes: usize,
}

impl RenderTarget for Recorded {
    fn set_offset_px(&mut self, left: f64, top: f64) {
        self.offset = Some((left, top));
        self.writes += 1;
    }
    fn set_scale(&mut self, scale: Vector2) {
        self.scale = Some(scale);
        self.writes += 1;
    }
    fn set_rotation(&mut self, radians: f64) {
        self.rotation = Some(radians);
        self.writes += 1;
    }
}

#[test]
fn transform_maps_to_pixels() {
    let mut el = Recorded::default();
    let t = BubbleTransform {
        position: Vector2::new(0.25, 0.5),
        scale: Vector2::new(0.6, 1.0),
    };
    apply_transform(&mut el, &t, Viewport::new(800.0, 400.0));
    assert_eq!(el.offset, Some((200.0, 200.0)));
    assert_eq!(el.scale, Some(Vector2::new(0.6, 1.0)));
    assert_eq!(el.rotation, None);
}

#[test]
fn apply_is_idempotent() {
    let t = BubbleTransform {
        position: Vector2::new(0.1, 0.9),
        scale: Vector2::ONE,
    };
    let vp = Viewport::new(320.0, 240.0);
    let mut once = Recorded::default();
    apply_transform(&mut once, &t, vp);
    let mut twice = Recorded::default();
    apply_transform(&mut twice, &t, vp);
    apply_transform(&mut twice, &t, vp);
    assert_eq!(once.offset, twice.offset);
    assert_eq!(once.scale, twice.scale);
}

#[test]
fn rotor_sets_position_and_rotation() {
    let mut el = Recorded::default();
    let r = RotorTransform {
        position: Vector2::new(0.5, 0.5),
        angle: 1.5,
    };
    apply_rotor(&mut el, &r, Viewport::new(100.0, 50.0));
    assert_eq!(el.offset, Some((50.0, 25.0)));
    assert_eq!(el.rotation, Some(1.5));
    assert_eq!(el.scale, None);
}

#[test]
fn level_targets_fill_every_element() {
    let mut targets = LevelTargets {
        vertical: Recorded::default(),
        horizontal: Recorded::default(),
        rotating: Recorded::default(),
        rotor: Recorded::default(),
    };
    let layout = compute_layout(NormalizedOffset::CENTER, 0.0);
    targets.apply(&layout, Viewport::new(1000.0, 1000.0));
    for el in [&targets.vertical, &targets.horizontal, &targets.rotating] {
        assert_eq!(el.writes, 2);
    }
    assert_eq!(targets.rotor.writes, 2);
    let (left, top) = targets.horizontal.offset.unwrap();
    assert!((left - 496.5).abs() < 1e-9 && (top - 332.0).abs() < 1e-9);
}
