//! Simulator state and the single update entry point.
//!
//! The front-end translates platform events into [`InputEvent`]s and feeds
//! them to [`SimulatorState::apply`] one at a time. When an event is
//! accepted the caller recomputes the full layout before handling the next
//! one; there is no partial update.

use crate::constants::DEFAULT_THROTTLE_MS;
use crate::demo::demo_offset;
use crate::error::LevelError;
use crate::layout::{compute_layout, LevelLayout};
use crate::orientation::{normalize, NormalizedOffset, OrientationSample, ScreenOrientation};
use crate::render::Viewport;
use crate::rotor::RotorState;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulatorParams {
    /// Minimum spacing between accepted sensor samples.
    pub throttle_interval_ms: f64,
}

impl Default for SimulatorParams {
    fn default() -> Self {
        Self {
            throttle_interval_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl SimulatorParams {
    pub fn validate(&self) -> Result<(), LevelError> {
        let ms = self.throttle_interval_ms;
        if !ms.is_finite() || ms < 0.0 {
            return Err(LevelError::InvalidThrottle(ms));
        }
        Ok(())
    }
}

/// Drops samples that arrive sooner than `interval_ms` after the last
/// accepted one. Dropped samples are not buffered.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl SampleThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A `deviceorientation` reading; `None` when the browser reported nulls.
    SensorSample {
        sample: Option<OrientationSample>,
        timestamp_ms: f64,
    },
    /// Press on the dial; coordinates relative to the dial's centre.
    PointerDown { dx: f64, dy: f64 },
    PointerMove { dx: f64, dy: f64 },
    PointerUp { dx: f64, dy: f64 },
    PointerCancel,
    ViewportResize { width: f64, height: f64 },
    /// Animation frame of the sensorless demo sweep.
    DemoTick { elapsed_sec: f64 },
}

/// Where the tilt currently comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TiltSource {
    Sensor(Option<OrientationSample>),
    Demo(NormalizedOffset),
}

impl Default for TiltSource {
    fn default() -> Self {
        TiltSource::Sensor(None)
    }
}

#[derive(Clone, Debug)]
pub struct SimulatorState {
    params: SimulatorParams,
    tilt: TiltSource,
    rotor: RotorState,
    viewport: Viewport,
    throttle: SampleThrottle,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::with_params(SimulatorParams::default())
    }
}

impl SimulatorState {
    pub fn new(params: SimulatorParams) -> Result<Self, LevelError> {
        params.validate()?;
        Ok(Self::with_params(params))
    }

    fn with_params(params: SimulatorParams) -> Self {
        Self {
            throttle: SampleThrottle::new(params.throttle_interval_ms),
            params,
            tilt: TiltSource::default(),
            rotor: RotorState::default(),
            viewport: Viewport::default(),
        }
    }

    /// Feed one event. Returns true when visible state changed and the
    /// layout must be recomputed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::SensorSample {
                sample,
                timestamp_ms,
            } => {
                if !self.throttle.admit(timestamp_ms) {
                    return false;
                }
                match (self.tilt, sample) {
                    (TiltSource::Demo(_), Some(s)) => {
                        log::info!("[sensor] first reading received; leaving demo mode");
                        self.tilt = TiltSource::Sensor(Some(s));
                    }
                    (TiltSource::Sensor(_), Some(s)) => self.tilt = TiltSource::Sensor(Some(s)),
                    // incomplete readings keep the previous one
                    (_, None) => return false,
                }
                true
            }
            InputEvent::PointerDown { dx, dy } => {
                self.rotor.press(dx, dy);
                false
            }
            InputEvent::PointerMove { dx, dy } => self.rotor.drag(dx, dy),
            InputEvent::PointerUp { dx, dy } => self.rotor.release(dx, dy),
            InputEvent::PointerCancel => {
                self.rotor.cancel();
                false
            }
            InputEvent::ViewportResize { width, height } => {
                self.viewport = Viewport::new(width, height);
                true
            }
            InputEvent::DemoTick { elapsed_sec } => match self.tilt {
                TiltSource::Sensor(Some(_)) => false,
                TiltSource::Sensor(None) | TiltSource::Demo(_) => {
                    self.tilt = TiltSource::Demo(demo_offset(elapsed_sec));
                    true
                }
            },
        }
    }

    pub fn offset(&self, screen: ScreenOrientation) -> NormalizedOffset {
        match self.tilt {
            TiltSource::Sensor(sample) => normalize(sample.as_ref(), screen),
            TiltSource::Demo(offset) => offset,
        }
    }

    pub fn layout(&self, screen: ScreenOrientation) -> LevelLayout {
        compute_layout(self.offset(screen), self.rotor.angle())
    }

    #[inline]
    pub fn params(&self) -> &SimulatorParams {
        &self.params
    }

    #[inline]
    pub fn rotor(&self) -> &RotorState {
        &self.rotor
    }

    #[inline]
    pub fn rotor_angle(&self) -> f64 {
        self.rotor.angle()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn tilt_source(&self) -> TiltSource {
        self.tilt
    }

    pub fn last_sample(&self) -> Option<OrientationSample> {
        match self.tilt {
            TiltSource::Sensor(sample) => sample,
            TiltSource::Demo(_) => None,
        }
    }

    /// True once a real reading has been accepted.
    pub fn has_sensor_data(&self) -> bool {
        self.last_sample().is_some()
    }
}
