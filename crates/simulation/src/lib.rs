use bevy::prelude::*;

pub mod config;
pub mod easing;
pub mod error;
pub mod sim_rng;
pub mod simulation_sets;
pub mod snowfall;
pub mod snowflake;
pub mod tween;

pub use config::{Area, SnowfallConfig};
pub use error::SnowfallError;
pub use sim_rng::{RandomSource, SimRng};
pub use simulation_sets::SimulationSet;
pub use snowfall::{FlakeView, Snowfall, SnowfallArea, SnowfallStats};

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        simulation_sets::configure_sets(app);

        app.init_resource::<TickCounter>()
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        app.add_plugins((sim_rng::SimRngPlugin, snowfall::SnowfallPlugin));
    }
}
