use crate::geometry::Vector2;

// Layout tuning constants. All positions are normalized to the level
// container, (0, 0) top-left and (1, 1) bottom-right.

// Vertical tube: bubble travels upward as the y offset grows
pub const VERTICAL_MIN: Vector2 = Vector2::new(0.143, 0.48);
pub const VERTICAL_MAX: Vector2 = Vector2::new(0.143, 0.36);
pub const VERTICAL_CROSS_DRIFT: f64 = 0.02; // sideways wobble driven by the x offset

// Horizontal tube
pub const HORIZONTAL_MIN: Vector2 = Vector2::new(0.471, 0.332);
pub const HORIZONTAL_MAX: Vector2 = Vector2::new(0.522, 0.332);
pub const HORIZONTAL_CROSS_DRIFT: f64 = 0.04;

// Squash and stretch
pub const SKEW_BASE: f64 = 0.6; // along-axis scale at rest
pub const SKEW_GAIN: f64 = 0.8;
pub const SQUASH_GAIN_HORIZONTAL: f64 = 0.5;

// Rotating dial
pub const ROTOR_POSITION: Vector2 = Vector2::new(0.812, 0.32); // dial element anchor
pub const ROTOR_CENTER: Vector2 = Vector2::new(0.849, 0.431); // centre of the round vial
pub const ROTOR_RADIUS: Vector2 = Vector2::new(0.025, 0.05);
pub const ROTOR_PHASE_SHIFT: f64 = 0.79; // rad, rest orientation of the dial graphic
pub const ROTOR_DRIFT: Vector2 = Vector2::new(0.004, 0.015);
pub const ROTOR_SQUASH_GAIN: f64 = 0.5;

// Orientation mapping
pub const MAX_TILT_DEG: f64 = 90.0; // tilt that pushes a bubble to the end of its tube

// Interaction
pub const CLICK_ANGLE_OFFSET: f64 = std::f64::consts::FRAC_PI_4;
pub const CLICK_SLOP_PX: f64 = 4.0; // travel below this still counts as a click

// Sensor throttle
pub const DEFAULT_THROTTLE_MS: f64 = 1000.0 / 30.0;

// Demo sweep angular speed (rad/s)
pub const DEMO_SPEED: f64 = 1.0;
