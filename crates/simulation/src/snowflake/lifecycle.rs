//! Snowflake creation, per-tick update, and respawn.

use crate::config::{Area, SnowfallConfig};
use crate::error::SnowfallError;
use crate::sim_rng::RandomSource;
use crate::tween::Tween;

use super::types::{Snowflake, UpdateOutcome};

impl Snowflake {
    /// Create a flake with fully randomized state.
    ///
    /// The tween clock starts at a random point of its segment so the field
    /// does not sway in lockstep, and flakes start spread over the whole
    /// visible height rather than all entering from the top.
    pub fn spawn<R: RandomSource + ?Sized>(
        area: Area,
        config: &SnowfallConfig,
        rng: &mut R,
    ) -> Result<Self, SnowfallError> {
        let begin = rng.uniform(0.0, area.width);
        let target = begin + config.drift_scale * rng.normal(0.0, 1.0);
        let duration = rng.uniform(config.duration_min, config.duration_max);
        let elapsed = rng.uniform(0.0, duration);
        let tween = Tween::new(begin, target, elapsed, duration)?;
        let y = rng.uniform(-config.respawn_margin(), area.height);

        Ok(Self {
            tween,
            x: tween.current(),
            y,
            radius: config.max_radius / duration,
        })
    }

    /// Advance one tick: sway, fall, respawn if fully below the area, then
    /// refresh the rendered `x`.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        area: Area,
        config: &SnowfallConfig,
        rng: &mut R,
    ) -> UpdateOutcome {
        let retargeted = self.tween.advance(dt, config.drift_scale, rng);

        self.y += config.fall_speed * dt / self.tween.duration();

        let respawned = self.y > area.height + config.respawn_margin();
        if respawned {
            self.respawn(area, config, rng);
        }

        self.x = self.tween.current();

        UpdateOutcome {
            retargeted,
            respawned,
        }
    }

    /// Move the flake back above the area at a fresh horizontal position.
    /// Duration and radius are kept, so a flake holds its depth for life.
    pub fn respawn<R: RandomSource + ?Sized>(
        &mut self,
        area: Area,
        config: &SnowfallConfig,
        rng: &mut R,
    ) {
        self.y = -config.respawn_margin();
        let begin = rng.uniform(0.0, area.width);
        self.tween.restart(begin, config.drift_scale, rng);
    }
}
