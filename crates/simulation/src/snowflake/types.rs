//! Snowflake state.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::tween::Tween;

/// A falling, horizontally drifting point with a size.
///
/// `tween.duration()` doubles as the flake's depth: a longer duration gives a
/// smaller radius, slower sway and slower fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snowflake {
    pub(crate) tween: Tween,
    /// Rendered horizontal coordinate, `tween.current()` as of the last update.
    pub x: f32,
    /// Vertical coordinate in screen space (grows downward).
    pub y: f32,
    /// `max_radius / tween.duration()`, fixed for the flake's lifetime.
    pub(crate) radius: f32,
}

impl Snowflake {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.tween.duration()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    /// Normalized depth in `[0, 1)`: 0 for the nearest flakes (duration at the
    /// bottom of the range), approaching 1 for the farthest.
    pub fn depth(&self, duration_min: f32, duration_max: f32) -> f32 {
        ((self.duration() - duration_min) / (duration_max - duration_min)).clamp(0.0, 1.0)
    }
}

/// What happened to a flake during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub retargeted: bool,
    pub respawned: bool,
}
