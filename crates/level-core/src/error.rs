use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("unknown screen orientation type: {0:?}")]
    UnknownOrientation(String),
    #[error("throttle interval must be finite and non-negative, got {0} ms")]
    InvalidThrottle(f64),
}
