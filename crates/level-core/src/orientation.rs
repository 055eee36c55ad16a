//! Device orientation to normalized tilt offsets.
//!
//! Browsers report `beta` (front/back tilt) and `gamma` (left/right tilt)
//! relative to the device's natural axes. Which of them moves a bubble along
//! the screen's x or y axis, and in which direction, depends on how the
//! device is currently held, so every screen orientation gets its own
//! axis swap and sign.

use crate::constants::MAX_TILT_DEG;
use crate::error::LevelError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

static WARNED_UNKNOWN: AtomicBool = AtomicBool::new(false);

/// Last raw reading from the orientation sensor, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl OrientationSample {
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Build a sample from nullable DOM fields.
    ///
    /// `beta` and `gamma` drive the layout and must both be present; a
    /// missing `alpha` only affects the readout and defaults to 0.
    pub fn from_optional(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Option<Self> {
        Some(Self {
            alpha: alpha.unwrap_or(0.0),
            beta: beta?,
            gamma: gamma?,
        })
    }
}

/// Tilt mapped onto the two screen axes, each within [0, 1], 0.5 = level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedOffset {
    pub x: f64,
    pub y: f64,
}

impl NormalizedOffset {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Clamps both components into [0, 1]; NaN collapses to the centre.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_axis(x),
            y: clamp_axis(y),
        }
    }
}

impl Default for NormalizedOffset {
    fn default() -> Self {
        Self::CENTER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenOrientation {
    LandscapePrimary,
    LandscapeSecondary,
    PortraitPrimary,
    PortraitSecondary,
    Unknown,
}

impl ScreenOrientation {
    /// Map the value of `screen.orientation.type`, which may be missing on
    /// older browsers, falling back to `Unknown`.
    pub fn from_dom(type_str: Option<&str>) -> Self {
        type_str
            .and_then(|s| s.parse().ok())
            .unwrap_or(ScreenOrientation::Unknown)
    }

    #[inline]
    pub fn is_portrait(self) -> bool {
        matches!(
            self,
            ScreenOrientation::PortraitPrimary | ScreenOrientation::PortraitSecondary
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenOrientation::LandscapePrimary => "landscape-primary",
            ScreenOrientation::LandscapeSecondary => "landscape-secondary",
            ScreenOrientation::PortraitPrimary => "portrait-primary",
            ScreenOrientation::PortraitSecondary => "portrait-secondary",
            ScreenOrientation::Unknown => "unknown",
        }
    }
}

impl FromStr for ScreenOrientation {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landscape-primary" => Ok(ScreenOrientation::LandscapePrimary),
            "landscape-secondary" => Ok(ScreenOrientation::LandscapeSecondary),
            "portrait-primary" => Ok(ScreenOrientation::PortraitPrimary),
            "portrait-secondary" => Ok(ScreenOrientation::PortraitSecondary),
            other => Err(LevelError::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for ScreenOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen-space tilt in degrees, `(x, y)`, for the given screen orientation.
pub fn screen_tilt(sample: &OrientationSample, screen: ScreenOrientation) -> (f64, f64) {
    let OrientationSample { beta, gamma, .. } = *sample;
    match screen {
        ScreenOrientation::LandscapePrimary => (-beta, -gamma),
        ScreenOrientation::LandscapeSecondary => (beta, gamma),
        ScreenOrientation::PortraitSecondary => (gamma, -beta),
        ScreenOrientation::PortraitPrimary => (-gamma, beta),
        ScreenOrientation::Unknown => {
            if !WARNED_UNKNOWN.swap(true, Ordering::Relaxed) {
                log::warn!("[sensor] screen orientation API unavailable; assuming portrait-primary");
            }
            (-gamma, beta)
        }
    }
}

/// Normalize the latest reading. Without a reading the bubbles rest centred.
pub fn normalize(sample: Option<&OrientationSample>, screen: ScreenOrientation) -> NormalizedOffset {
    match sample {
        Some(s) => {
            let (x, y) = screen_tilt(s, screen);
            NormalizedOffset::new(x / MAX_TILT_DEG + 0.5, y / MAX_TILT_DEG + 0.5)
        }
        None => NormalizedOffset::CENTER,
    }
}

#[inline]
fn clamp_axis(v: f64) -> f64 {
    if v.is_nan() {
        0.5
    } else {
        v.clamp(0.0, 1.0)
    }
}
