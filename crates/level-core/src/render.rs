//! Boundary between the layout engine and whatever draws the level.

use crate::geometry::Vector2;
use crate::layout::{BubbleTransform, LevelLayout, RotorTransform};

/// Container size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Normalized container coordinates to pixels.
    #[inline]
    pub fn to_px(&self, normalized: Vector2) -> Vector2 {
        normalized * Vector2::new(self.width, self.height)
    }
}

/// An absolutely positioned element inside the level container.
pub trait RenderTarget {
    fn set_offset_px(&mut self, left: f64, top: f64);
    fn set_scale(&mut self, scale: Vector2);
    fn set_rotation(&mut self, radians: f64);
}

pub fn apply_transform<T: RenderTarget + ?Sized>(
    target: &mut T,
    transform: &BubbleTransform,
    viewport: Viewport,
) {
    let px = viewport.to_px(transform.position);
    target.set_offset_px(px.x, px.y);
    target.set_scale(transform.scale);
}

pub fn apply_rotor<T: RenderTarget + ?Sized>(
    target: &mut T,
    rotor: &RotorTransform,
    viewport: Viewport,
) {
    let px = viewport.to_px(rotor.position);
    target.set_offset_px(px.x, px.y);
    target.set_rotation(rotor.angle);
}

/// Element handles for one level, in the order the layout fills them.
pub struct LevelTargets<T> {
    pub vertical: T,
    pub horizontal: T,
    pub rotating: T,
    pub rotor: T,
}

impl<T: RenderTarget> LevelTargets<T> {
    pub fn apply(&mut self, layout: &LevelLayout, viewport: Viewport) {
        apply_transform(&mut self.vertical, &layout.vertical, viewport);
        apply_transform(&mut self.horizontal, &layout.horizontal, viewport);
        apply_transform(&mut self.rotating, &layout.rotating, viewport);
        apply_rotor(&mut self.rotor, &layout.rotor, viewport);
    }
}
