//! Small 2D value types used by the layout engine.
//!
//! `Vector2` serves both as a normalized position and as a per-axis scale
//! factor. Arithmetic goes through glam's fixed-signature operators:
//! `v + w` and `v * w` are component-wise, `v + s` and `v * s` broadcast a
//! scalar.

use glam::DVec2;

pub type Vector2 = DVec2;

/// Straight segment between two points, sampled by a scalar factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRange {
    pub min: Vector2,
    pub max: Vector2,
}

impl LinearRange {
    pub const fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Interpolate from `min` (t = 0) to `max` (t = 1).
    ///
    /// `t` is not clamped: values outside [0, 1] extrapolate along the line.
    #[inline]
    pub fn position(&self, t: f64) -> Vector2 {
        self.min + (self.max - self.min) * t
    }
}

#[inline]
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
