//! Horizontal tween: one eased interpolation segment that chains into the
//! next by re-targeting from its own endpoint.

use serde::{Deserialize, Serialize};

use crate::easing::ease_in_out_quad;
use crate::error::SnowfallError;
use crate::sim_rng::RandomSource;

/// One horizontal interpolation segment.
///
/// `duration` is fixed at construction and must be strictly positive; the
/// segment clock is divided by it every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub begin: f32,
    pub target: f32,
    pub elapsed: f32,
    duration: f32,
}

impl Tween {
    /// Build a segment. `duration` must be finite and strictly positive.
    pub fn new(
        begin: f32,
        target: f32,
        elapsed: f32,
        duration: f32,
    ) -> Result<Self, SnowfallError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(SnowfallError::InvalidDuration(duration));
        }
        Ok(Self {
            begin,
            target,
            elapsed,
            duration,
        })
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Fraction of the segment completed. Exceeds 1.0 for at most one tick.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Eased horizontal value at the current clock.
    #[inline]
    pub fn current(&self) -> f32 {
        self.begin + (self.target - self.begin) * ease_in_out_quad(self.progress())
    }

    /// Advance the clock by `dt`. Once it passes `duration` the segment
    /// re-targets from its endpoint, so `current()` does not jump.
    ///
    /// Returns `true` when a retarget happened.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, dt: f32, drift: f32, rng: &mut R) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.duration {
            let end = self.target;
            self.restart(end, drift, rng);
            return true;
        }
        false
    }

    /// Reseat the segment at `begin` with a fresh random target and a zeroed clock.
    pub fn restart<R: RandomSource + ?Sized>(&mut self, begin: f32, drift: f32, rng: &mut R) {
        self.begin = begin;
        self.target = begin + drift * rng.normal(0.0, 1.0);
        self.elapsed = 0.0;
    }
}
