// ---------------------------------------------------------------------------
// SnowfallError: precondition violations for snowfall operations
// ---------------------------------------------------------------------------

use std::fmt;

use crate::config::MAX_DRIFT_SCALE;

/// Errors raised when a snowfall operation is called with inputs that would
/// otherwise produce NaN positions or a degenerate random draw.
///
/// The motion model itself is plain float arithmetic and cannot fail once
/// these preconditions hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnowfallError {
    /// Area bounds are non-finite or not strictly positive.
    InvalidArea { width: f32, height: f32 },
    /// Duration range has a non-positive lower bound or an empty span.
    InvalidDurationRange { min: f32, max: f32 },
    /// Maximum radius is non-finite, not strictly positive, or so large that
    /// the derived flake radius or respawn margin overflows.
    InvalidRadius(f32),
    /// Horizontal drift scale is non-finite, negative, or above
    /// `MAX_DRIFT_SCALE`.
    InvalidDriftScale(f32),
    /// Fall speed is non-finite or negative.
    InvalidFallSpeed(f32),
    /// Frame time step is non-finite or negative.
    InvalidTimeStep(f32),
    /// Tween segment length is non-finite or not strictly positive.
    InvalidDuration(f32),
    /// The vertical span a flake travels (`height + margin`) overflows.
    InvalidRespawnBounds { height: f32, margin: f32 },
}

impl fmt::Display for SnowfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnowfallError::InvalidArea { width, height } => {
                write!(f, "Invalid area: {width}x{height} (both sides must be positive)")
            }
            SnowfallError::InvalidDurationRange { min, max } => write!(
                f,
                "Invalid duration range: [{min}, {max}) (need 0 < min < max)"
            ),
            SnowfallError::InvalidRadius(r) => {
                write!(f, "Invalid max radius: {r} (must be positive)")
            }
            SnowfallError::InvalidDriftScale(d) => write!(
                f,
                "Invalid drift scale: {d} (must be in [0, {MAX_DRIFT_SCALE}])"
            ),
            SnowfallError::InvalidFallSpeed(s) => {
                write!(f, "Invalid fall speed: {s} (must be non-negative)")
            }
            SnowfallError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {dt} (must be finite and non-negative)")
            }
            SnowfallError::InvalidDuration(d) => {
                write!(f, "Invalid tween duration: {d} (must be positive)")
            }
            SnowfallError::InvalidRespawnBounds { height, margin } => write!(
                f,
                "Invalid respawn bounds: height {height} + margin {margin} overflows"
            ),
        }
    }
}

impl std::error::Error for SnowfallError {}
