//! Bubble placement for the three vials and the dial.
//!
//! Everything here is a pure function of the tilt offset and rotor angle,
//! so a layout can be recomputed from scratch on every event or resize.

use crate::constants::*;
use crate::geometry::{clamp01, LinearRange, Vector2};
use crate::orientation::NormalizedOffset;

/// Normalized position and per-axis scale of one bubble element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleTransform {
    pub position: Vector2,
    pub scale: Vector2,
}

/// Placement of the dial element itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotorTransform {
    pub position: Vector2,
    pub angle: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelLayout {
    pub vertical: BubbleTransform,
    pub horizontal: BubbleTransform,
    pub rotating: BubbleTransform,
    pub rotor: RotorTransform,
}

pub const VERTICAL_RANGE: LinearRange = LinearRange::new(VERTICAL_MIN, VERTICAL_MAX);
pub const HORIZONTAL_RANGE: LinearRange = LinearRange::new(HORIZONTAL_MIN, HORIZONTAL_MAX);

pub fn compute_layout(offset: NormalizedOffset, rotor_angle: f64) -> LevelLayout {
    LevelLayout {
        vertical: vertical_bubble(offset),
        horizontal: horizontal_bubble(offset),
        rotating: rotating_bubble(offset, rotor_angle),
        rotor: RotorTransform {
            position: ROTOR_POSITION,
            angle: rotor_angle,
        },
    }
}

/// Bubble in the upright tube. Stretches sideways and flattens as it
/// leaves the centre, and drifts slightly with the cross-axis tilt.
pub fn vertical_bubble(offset: NormalizedOffset) -> BubbleTransform {
    let skew = (0.5 - offset.y).abs() * SKEW_GAIN;
    let scale = Vector2::new(SKEW_BASE + skew, 1.0 - skew);
    let mut position = VERTICAL_RANGE.position(offset.y);
    position.x += (offset.x * VERTICAL_CROSS_DRIFT - VERTICAL_CROSS_DRIFT / 2.0) * (1.0 - scale.x);
    BubbleTransform { position, scale }
}

/// Bubble in the lying tube.
pub fn horizontal_bubble(offset: NormalizedOffset) -> BubbleTransform {
    let from_center = (0.5 - offset.x).abs();
    let scale = Vector2::new(
        1.0 - from_center * SQUASH_GAIN_HORIZONTAL,
        SKEW_BASE + from_center * SKEW_GAIN,
    );
    let mut position = HORIZONTAL_RANGE.position(offset.x);
    position.y -=
        (offset.y * HORIZONTAL_CROSS_DRIFT - HORIZONTAL_CROSS_DRIFT / 2.0) * (1.0 - scale.y);
    BubbleTransform { position, scale }
}

/// Unit direction of the dial's travel axis.
#[inline]
pub fn rotor_direction(rotor_angle: f64) -> Vector2 {
    let phase = rotor_angle - ROTOR_PHASE_SHIFT;
    Vector2::new(phase.cos(), phase.sin())
}

/// Segment through the round vial along which the bubble slides for the
/// given dial angle.
pub fn rotor_axis(rotor_angle: f64) -> LinearRange {
    let delta = rotor_direction(rotor_angle) * ROTOR_RADIUS;
    LinearRange::new(ROTOR_CENTER + delta, ROTOR_CENTER - delta)
}

/// Where along [`rotor_axis`] the bubble sits: the tilt projected onto the
/// rotated axis, clamped to the segment.
pub fn rotor_travel(offset: NormalizedOffset, rotor_angle: f64) -> f64 {
    let dir = rotor_direction(rotor_angle);
    let along_x = (0.5 - offset.x) * dir.x;
    let along_y = (offset.y - 0.5) * dir.y;
    clamp01(along_x + along_y + 0.5)
}

/// Bubble in the round vial under the dial.
///
/// The rotation acts on the axis of travel, not on the final point: the
/// bubble slides along `rotor_axis` and only a small drift perpendicular to
/// it comes straight from the tilt.
pub fn rotating_bubble(offset: NormalizedOffset, rotor_angle: f64) -> BubbleTransform {
    let dir = rotor_direction(rotor_angle);
    let drift = Vector2::new(
        (offset.x - 0.5) * (1.0 - dir.x / 2.0),
        (0.5 - offset.y) * (1.0 - dir.y / 2.0),
    );
    let position =
        rotor_axis(rotor_angle).position(rotor_travel(offset, rotor_angle)) + drift * ROTOR_DRIFT;
    let scale = Vector2::ONE - drift.abs() * ROTOR_SQUASH_GAIN;
    BubbleTransform { position, scale }
}
