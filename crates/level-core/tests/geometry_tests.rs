// Host-side tests for the 2D value types.

use level_core::{LinearRange, Vector2};

fn approx(a: Vector2, b: Vector2) -> bool {
    (a - b).abs().max_element() < 1e-12
}

#[test]
fn vector_ops_have_fixed_signatures() {
    let a = Vector2::new(0.5, 0.5);
    let b = Vector2::new(0.2, 0.3);
    assert!(approx(a + b, Vector2::new(0.7, 0.8)));
    assert_eq!(a + 1.0, Vector2::new(1.5, 1.5));
    assert!(approx(a * b, Vector2::new(0.1, 0.15)));
    assert_eq!(b * -1.0, Vector2::new(-0.2, -0.3));
}

#[test]
fn range_hits_endpoints() {
    let r = LinearRange::new(Vector2::new(0.143, 0.48), Vector2::new(0.143, 0.36));
    assert_eq!(r.position(0.0), r.min);
    assert!(approx(r.position(1.0), r.max));
    assert!(approx(r.position(0.5), Vector2::new(0.143, 0.42)));
}

#[test]
fn range_samples_stay_on_segment() {
    let r = LinearRange::new(Vector2::new(0.471, 0.332), Vector2::new(0.522, 0.1));
    let dir = r.max - r.min;
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let p = r.position(t);
        // collinear with the segment
        let rel = p - r.min;
        assert!((rel.perp_dot(dir)).abs() < 1e-12, "off the line at t={t}");
        // and between the endpoints
        let along = rel.dot(dir) / dir.length_squared();
        assert!((-1e-12..=1.0 + 1e-12).contains(&along), "outside segment at t={t}");
    }
}

#[test]
fn range_extrapolates_without_clamping() {
    let r = LinearRange::new(Vector2::ZERO, Vector2::new(1.0, 2.0));
    assert!(approx(r.position(1.5), Vector2::new(1.5, 3.0)));
    assert!(approx(r.position(-0.5), Vector2::new(-0.5, -1.0)));
}
