use crate::orientation::OrientationSample;

const NBSP_PAD: &str = "\u{a0}\u{a0}\u{a0}";

/// Fixed-width angle text so the readout does not jitter as values change:
/// a `-` or three non-breaking spaces, then the magnitude zero-padded to
/// `000.00`.
pub fn format_angle(deg: f64) -> String {
    let sign = if deg < 0.0 { "-" } else { NBSP_PAD };
    format!("{}{:06.2}", sign, deg.abs())
}

/// Text for the three readout lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AngleReadout {
    pub z: String,
    pub x: String,
    pub y: String,
}

impl AngleReadout {
    /// `alpha` spins around Z, `beta` tilts around X, `gamma` around Y.
    pub fn from_sample(sample: &OrientationSample) -> Self {
        Self {
            z: format!("Z: {}°", format_angle(sample.alpha)),
            x: format!("X: {}°", format_angle(sample.beta)),
            y: format!("Y: {}°", format_angle(sample.gamma)),
        }
    }
}
