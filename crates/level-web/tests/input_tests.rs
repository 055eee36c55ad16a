// Host-side tests for pure pointer/config helpers.
// The web crate is wasm-only, so we include the module source directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn offset_from_center_of_rect() {
    // 100x50 rect at (20, 40): centre is (70, 65)
    assert_eq!(offset_from_center(70.0, 65.0, 20.0, 40.0, 100.0, 50.0), (0.0, 0.0));
    assert_eq!(offset_from_center(120.0, 40.0, 20.0, 40.0, 100.0, 50.0), (50.0, -25.0));
    assert_eq!(offset_from_center(0.0, 100.0, 20.0, 40.0, 100.0, 50.0), (-70.0, 35.0));
}

#[test]
fn offset_angle_matches_screen_directions() {
    // screen y grows downward, so a pointer below the centre is +pi/2
    let (dx, dy) = offset_from_center(50.0, 80.0, 0.0, 0.0, 100.0, 100.0);
    assert!((dy.atan2(dx) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn parse_throttle_accepts_non_negative_numbers() {
    assert_eq!(parse_throttle_ms(Some("33")), Some(33.0));
    assert_eq!(parse_throttle_ms(Some(" 16.5 ")), Some(16.5));
    assert_eq!(parse_throttle_ms(Some("0")), Some(0.0));
}

#[test]
fn parse_throttle_rejects_garbage() {
    assert_eq!(parse_throttle_ms(None), None);
    assert_eq!(parse_throttle_ms(Some("")), None);
    assert_eq!(parse_throttle_ms(Some("fast")), None);
    assert_eq!(parse_throttle_ms(Some("-5")), None);
    assert_eq!(parse_throttle_ms(Some("inf")), None);
    assert_eq!(parse_throttle_ms(Some("NaN")), None);
}
