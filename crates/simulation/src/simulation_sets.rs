//! Simulation ordering via `SystemSet` phases in `FixedUpdate`.
//!
//! ```text
//! PreSim  →  Simulation
//! ```
//!
//! * **PreSim** – Tick counter and other per-tick bookkeeping.
//! * **Simulation** – Snowfall area sync and the snowfall advance. One
//!   advance completes before `Update` systems (rendering) read the field.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
}

pub(crate) fn configure_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (SimulationSet::PreSim, SimulationSet::Simulation).chain(),
    );
}
