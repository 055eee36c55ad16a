//! Gesture-driven dial angle.
//!
//! Two interaction modes share the same angle. Dragging rotates the dial
//! relative to the angle it had when the press started. A tap (press and
//! release without travelling) points the dial straight at the tap.

use crate::constants::{CLICK_ANGLE_OFFSET, CLICK_SLOP_PX};
use crate::geometry::Vector2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RotorGesture {
    #[default]
    Idle,
    Dragging {
        initial_angle: f64,
        press: Vector2,
        moved: bool,
    },
}

/// Dial angle in radians plus the in-flight gesture, if any.
///
/// Pointer coordinates passed in are relative to the dial's centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotorState {
    angle: f64,
    gesture: RotorGesture,
}

impl RotorState {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            gesture: RotorGesture::Idle,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    #[inline]
    pub fn gesture(&self) -> RotorGesture {
        self.gesture
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, RotorGesture::Dragging { .. })
    }

    /// Pointer pressed on the dial. A press while already dragging restarts
    /// the gesture from the current angle.
    pub fn press(&mut self, dx: f64, dy: f64) {
        self.gesture = RotorGesture::Dragging {
            initial_angle: self.angle,
            press: Vector2::new(dx, dy),
            moved: false,
        };
    }

    /// Returns true when the angle changed.
    pub fn drag(&mut self, dx: f64, dy: f64) -> bool {
        let RotorGesture::Dragging {
            initial_angle,
            press,
            moved,
        } = &mut self.gesture
        else {
            return false;
        };
        let pointer = Vector2::new(dx, dy);
        if !*moved && pointer.distance(*press) > CLICK_SLOP_PX {
            *moved = true;
        }
        self.angle = pointer_angle(pointer) - *initial_angle;
        true
    }

    /// Ends the gesture. A gesture that never left the click slop sets the
    /// dial to the absolute pointer angle. Returns true when the angle changed.
    pub fn release(&mut self, dx: f64, dy: f64) -> bool {
        match std::mem::take(&mut self.gesture) {
            RotorGesture::Dragging { moved: false, .. } => {
                self.angle = pointer_angle(Vector2::new(dx, dy)) + CLICK_ANGLE_OFFSET;
                log::debug!("[rotor] tap set angle to {:.3} rad", self.angle);
                true
            }
            RotorGesture::Dragging { moved: true, .. } => {
                log::debug!("[rotor] drag ended at {:.3} rad", self.angle);
                false
            }
            RotorGesture::Idle => false,
        }
    }

    /// Abandon the gesture without touching the angle.
    pub fn cancel(&mut self) {
        self.gesture = RotorGesture::Idle;
    }
}

#[inline]
fn pointer_angle(p: Vector2) -> f64 {
    p.y.atan2(p.x)
}
