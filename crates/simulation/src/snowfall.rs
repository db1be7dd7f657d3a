//! Snowfall: the fixed-size field of flakes and the plugin that advances it.
//!
//! `Snowfall` owns every flake in one contiguous `Vec` whose length never
//! changes after `initialize`. `advance` updates all flakes in order from a
//! single RNG stream, so a seeded run is fully reproducible. Renderers read
//! `particles()`, which borrows the field without mutating it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{Area, SnowfallConfig, FRAME_RATE_HZ};
use crate::error::SnowfallError;
use crate::sim_rng::{RandomSource, SimRng};
use crate::snowflake::Snowflake;
use crate::TickCounter;

/// How often (in ticks) aggregate stats are written to the debug log.
const STATS_LOG_INTERVAL: u64 = 600;

/// What the renderer needs for one flake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlakeView {
    /// Screen-space centre (origin top-left, y grows downward).
    pub position: Vec2,
    pub radius: f32,
}

/// Running counters over the lifetime of a `Snowfall`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnowfallStats {
    pub ticks: u64,
    pub retargets: u64,
    pub respawns: u64,
}

/// The simulated field of flakes.
#[derive(Resource, Debug, Clone)]
pub struct Snowfall {
    flakes: Vec<Snowflake>,
    config: SnowfallConfig,
    area: Area,
    stats: SnowfallStats,
}

impl Snowfall {
    /// Build `config.particle_count` independently randomized flakes.
    pub fn initialize<R: RandomSource + ?Sized>(
        config: SnowfallConfig,
        area: Area,
        rng: &mut R,
    ) -> Result<Self, SnowfallError> {
        config.validate()?;
        config.validate_area(area)?;

        let flakes = (0..config.particle_count)
            .map(|_| Snowflake::spawn(area, &config, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            flakes,
            config,
            area,
            stats: SnowfallStats::default(),
        })
    }

    /// Advance every flake by `dt` seconds.
    ///
    /// Flakes do not interact, so update order only matters for which random
    /// draws each flake receives.
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
    ) -> Result<(), SnowfallError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SnowfallError::InvalidTimeStep(dt));
        }

        let area = self.area;
        for flake in &mut self.flakes {
            let outcome = flake.update(dt, area, &self.config, rng);
            self.stats.retargets += u64::from(outcome.retargeted);
            self.stats.respawns += u64::from(outcome.respawned);
        }
        self.stats.ticks += 1;
        Ok(())
    }

    /// Read view for the renderer. Can be called any number of times per frame.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = FlakeView> + '_ {
        self.flakes.iter().map(|f| FlakeView {
            position: f.position(),
            radius: f.radius(),
        })
    }

    /// Render view of a single flake.
    pub fn particle(&self, index: usize) -> Option<FlakeView> {
        self.flakes.get(index).map(|f| FlakeView {
            position: f.position(),
            radius: f.radius(),
        })
    }

    /// Change the bounds used by later updates and respawns. Flakes keep their
    /// current positions; any now outside the area drift back in or respawn.
    pub fn resize(&mut self, area: Area) -> Result<(), SnowfallError> {
        self.config.validate_area(area)?;
        self.area = area;
        Ok(())
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    pub fn stats(&self) -> SnowfallStats {
        self.stats
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Startup area for the snowfall. The rendering side keeps it in sync with
/// the primary window afterwards.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SnowfallArea(pub Area);

/// Build the `Snowfall` resource from the configured settings.
pub fn init_snowfall(
    mut commands: Commands,
    config: Res<SnowfallConfig>,
    area: Res<SnowfallArea>,
    mut rng: ResMut<SimRng>,
) {
    match Snowfall::initialize(config.clone(), area.0, &mut rng.0) {
        Ok(snowfall) => {
            info!(
                "Snowfall: {} flakes over {}x{}",
                snowfall.len(),
                area.0.width,
                area.0.height
            );
            commands.insert_resource(snowfall);
        }
        Err(e) => error!("Snowfall: failed to initialize: {}", e),
    }
}

/// Advance the field by the fixed timestep. No-op when initialization failed.
pub fn advance_snowfall(
    time: Res<Time>,
    tick: Res<TickCounter>,
    snowfall: Option<ResMut<Snowfall>>,
    mut rng: ResMut<SimRng>,
) {
    let Some(mut snowfall) = snowfall else {
        return;
    };
    if let Err(e) = snowfall.advance(time.delta_secs(), &mut rng.0) {
        warn!("Snowfall: skipped tick: {}", e);
        return;
    }
    if tick.0 % STATS_LOG_INTERVAL == 0 {
        let stats = snowfall.stats();
        debug!(
            "Snowfall: tick {} retargets={} respawns={}",
            stats.ticks, stats.retargets, stats.respawns
        );
    }
}

/// Apply a changed `SnowfallArea` to the live field.
pub fn sync_snowfall_area(area: Res<SnowfallArea>, snowfall: Option<ResMut<Snowfall>>) {
    if !area.is_changed() {
        return;
    }
    let Some(mut snowfall) = snowfall else {
        return;
    };
    if snowfall.area() == area.0 {
        return;
    }
    match snowfall.resize(area.0) {
        Ok(()) => info!("Snowfall: resized to {}x{}", area.0.width, area.0.height),
        Err(e) => warn!("Snowfall: ignoring resize: {}", e),
    }
}

pub struct SnowfallPlugin;

impl Plugin for SnowfallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnowfallConfig>()
            .init_resource::<SnowfallArea>()
            .insert_resource(Time::<Fixed>::from_hz(FRAME_RATE_HZ))
            .add_systems(Startup, init_snowfall)
            .add_systems(
                FixedUpdate,
                (sync_snowfall_area, advance_snowfall)
                    .chain()
                    .in_set(crate::SimulationSet::Simulation),
            );
    }
}
