use crate::constants::DEMO_SPEED;
use crate::orientation::NormalizedOffset;

/// Offset for the sensorless demo: both axes sweep end to end, a quarter
/// period apart, so the bubbles trace a circle.
pub fn demo_offset(elapsed_sec: f64) -> NormalizedOffset {
    let phase = elapsed_sec * DEMO_SPEED;
    NormalizedOffset::new(phase.cos() / 2.0 + 0.5, phase.sin() / 2.0 + 0.5)
}
