//! Snowfall constants and the tunable configuration passed into
//! `Snowfall::initialize`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SnowfallError;

pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const DEFAULT_MAX_RADIUS: f32 = 5.0;
pub const DEFAULT_DRIFT_SCALE: f32 = 10.0;
pub const DEFAULT_DURATION_MIN: f32 = 1.0;
pub const DEFAULT_DURATION_MAX: f32 = 5.0;
pub const DEFAULT_AREA_WIDTH: f32 = 500.0;
pub const DEFAULT_AREA_HEIGHT: f32 = 500.0;

/// Fixed simulation rate. One `advance` per tick at this rate.
pub const FRAME_RATE_HZ: f64 = 60.0;

/// Fall speed in pixels per second for a flake with a duration of 1.0.
/// At 60 Hz this moves a flake `1 / duration` pixels per tick.
pub const DEFAULT_FALL_SPEED: f32 = 60.0;

/// Largest accepted `drift_scale`. Keeps `begin + drift * normal()` well inside
/// `f32` range for any area width.
pub const MAX_DRIFT_SCALE: f32 = 1.0e6;

/// Visible area bounds in screen space (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
        }
    }
}

impl Area {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rejects non-finite or non-positive bounds. A zero-width area would make
    /// the respawn draw `uniform(0, 0)` degenerate.
    pub fn validate(&self) -> Result<(), SnowfallError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(SnowfallError::InvalidArea {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Snowfall tuning parameters.
///
/// Inserted as a resource by `SnowfallPlugin` (defaults) and read once by the
/// startup system that builds the `Snowfall`. Hosts can insert their own copy
/// before adding the plugin.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowfallConfig {
    /// Number of flakes. Constant for the lifetime of a `Snowfall`.
    pub particle_count: usize,
    /// Radius of the nearest possible flake; rendered radius is `max_radius / duration`.
    pub max_radius: f32,
    /// Standard deviation of the horizontal distance covered by one tween segment.
    pub drift_scale: f32,
    /// Inclusive lower bound of the duration draw. Must be strictly positive.
    pub duration_min: f32,
    /// Exclusive upper bound of the duration draw.
    pub duration_max: f32,
    /// Pixels per second fallen by a flake with duration 1.0.
    pub fall_speed: f32,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_radius: DEFAULT_MAX_RADIUS,
            drift_scale: DEFAULT_DRIFT_SCALE,
            duration_min: DEFAULT_DURATION_MIN,
            duration_max: DEFAULT_DURATION_MAX,
            fall_speed: DEFAULT_FALL_SPEED,
        }
    }
}

impl SnowfallConfig {
    /// Check every parameter that feeds a division or a range draw, and the
    /// values derived from them.
    pub fn validate(&self) -> Result<(), SnowfallError> {
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(SnowfallError::InvalidRadius(self.max_radius));
        }
        if !(0.0..=MAX_DRIFT_SCALE).contains(&self.drift_scale) {
            return Err(SnowfallError::InvalidDriftScale(self.drift_scale));
        }
        if !(self.fall_speed.is_finite() && self.fall_speed >= 0.0) {
            return Err(SnowfallError::InvalidFallSpeed(self.fall_speed));
        }
        let range_ok = self.duration_min.is_finite()
            && self.duration_max.is_finite()
            && self.duration_min > 0.0
            && self.duration_max > self.duration_min;
        if !range_ok {
            return Err(SnowfallError::InvalidDurationRange {
                min: self.duration_min,
                max: self.duration_max,
            });
        }

        // Largest radius and fastest fall belong to the shortest duration.
        let margin_ok = self.respawn_margin().is_finite();
        if !(margin_ok && (self.max_radius / self.duration_min).is_finite()) {
            return Err(SnowfallError::InvalidRadius(self.max_radius));
        }
        if !(self.fall_speed / self.duration_min).is_finite() {
            return Err(SnowfallError::InvalidFallSpeed(self.fall_speed));
        }
        Ok(())
    }

    /// Check `area` on its own and against this config. Flakes spawn in
    /// `[-margin, height)` and respawn past `height + margin`, so that span
    /// must stay finite.
    pub fn validate_area(&self, area: Area) -> Result<(), SnowfallError> {
        area.validate()?;
        let margin = self.respawn_margin();
        if !(area.height + margin).is_finite() {
            return Err(SnowfallError::InvalidRespawnBounds {
                height: area.height,
                margin,
            });
        }
        Ok(())
    }

    /// Vertical margin a flake must clear below the area before respawning,
    /// and the offset above the area it respawns at.
    pub fn respawn_margin(&self) -> f32 {
        2.0 * self.max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SnowfallConfig::default().validate().is_ok());
        assert!(Area::default().validate().is_ok());
    }

    #[test]
    fn test_default_constants() {
        let config = SnowfallConfig::default();
        assert_eq!(config.particle_count, 200);
        assert_eq!(config.max_radius, 5.0);
        assert_eq!(config.drift_scale, 10.0);
        assert_eq!(config.duration_min, 1.0);
        assert_eq!(config.duration_max, 5.0);
        assert_eq!(config.respawn_margin(), 10.0);
        assert_eq!(Area::default(), Area::new(500.0, 500.0));
    }

    #[test]
    fn test_zero_width_area_rejected() {
        let err = Area::new(0.0, 500.0).validate().unwrap_err();
        assert!(matches!(err, SnowfallError::InvalidArea { .. }));
        assert!(Area::new(500.0, f32::NAN).validate().is_err());
        assert!(Area::new(-1.0, 500.0).validate().is_err());
    }

    #[test]
    fn test_non_positive_duration_min_rejected() {
        let config = SnowfallConfig {
            duration_min: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidDurationRange { .. })
        ));
    }

    #[test]
    fn test_inverted_duration_range_rejected() {
        let config = SnowfallConfig {
            duration_min: 5.0,
            duration_max: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_radius_drift_and_fall_speed_rejected() {
        let radius = SnowfallConfig {
            max_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            radius.validate(),
            Err(SnowfallError::InvalidRadius(_))
        ));

        let drift = SnowfallConfig {
            drift_scale: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            drift.validate(),
            Err(SnowfallError::InvalidDriftScale(_))
        ));

        let fall = SnowfallConfig {
            fall_speed: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            fall.validate(),
            Err(SnowfallError::InvalidFallSpeed(_))
        ));
    }

    #[test]
    fn test_radius_overflowing_margin_rejected() {
        let config = SnowfallConfig {
            max_radius: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_radius_overflowing_flake_size_rejected() {
        // 5 / 1e-40 overflows even though both inputs are finite and positive.
        let config = SnowfallConfig {
            duration_min: 1.0e-40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_fall_speed_overflowing_per_duration_rejected() {
        let config = SnowfallConfig {
            max_radius: 1.0e-30,
            fall_speed: 1.0e30,
            duration_min: 1.0e-20,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidFallSpeed(_))
        ));
    }

    #[test]
    fn test_drift_scale_upper_bound() {
        let huge = SnowfallConfig {
            drift_scale: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(SnowfallError::InvalidDriftScale(_))
        ));

        let limit = SnowfallConfig {
            drift_scale: MAX_DRIFT_SCALE,
            ..Default::default()
        };
        assert!(limit.validate().is_ok());
    }

    #[test]
    fn test_validate_area_rejects_overflowing_span() {
        let config = SnowfallConfig {
            max_radius: 1.0e38,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.validate_area(Area::default()).is_ok());
        assert!(matches!(
            config.validate_area(Area::new(500.0, f32::MAX)),
            Err(SnowfallError::InvalidRespawnBounds { .. })
        ));
        assert!(matches!(
            config.validate_area(Area::new(0.0, 500.0)),
            Err(SnowfallError::InvalidArea { .. })
        ));
    }

    #[test]
    fn test_zero_drift_is_allowed() {
        let config = SnowfallConfig {
            drift_scale: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SnowfallConfig {
            particle_count: 42,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let restored: SnowfallConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, restored);
    }
}
