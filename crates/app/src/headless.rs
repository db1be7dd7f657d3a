//! Headless `--headless [ticks]` mode: runs the snowfall without a window for
//! a fixed number of ticks and writes the final stats as one JSON line to
//! stdout.
//!
//! Useful for checking that a seed is reproducible:
//!
//! ```text
//! SNOWFALL_SEED=7 snowfall --headless 3600
//! ```

use std::io::{self, Write};

use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::{SimRng, Snowfall, SnowfallStats};

/// One simulated minute at 60 Hz.
pub const DEFAULT_TICKS: u64 = 3600;

pub fn run_headless(seed: Option<u64>, ticks: u64) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    if let Some(seed) = seed {
        app.insert_resource(SimRng::from_seed_u64(seed));
    }
    app.add_plugins(simulation::SimulationPlugin);

    // Initial update so Startup systems build the field.
    app.update();

    if app.world().get_resource::<Snowfall>().is_none() {
        error!("snowfall headless: field failed to initialize");
        return;
    }

    // Step the fixed schedule directly so the run does not depend on wall time.
    let dt = app.world().resource::<Time<Fixed>>().timestep();
    for _ in 0..ticks {
        app.world_mut().resource_mut::<Time>().advance_by(dt);
        app.world_mut().run_schedule(FixedUpdate);
    }

    let snowfall = app.world().resource::<Snowfall>();
    let stats = snowfall.stats();
    info!(
        "snowfall headless: {} ticks, {} flakes, {} respawns",
        stats.ticks,
        snowfall.len(),
        stats.respawns
    );

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_stats(&mut stdout, &stats) {
        error!("snowfall headless: failed to write stats: {e}");
    }
}

/// Write `stats` as one JSON line and flush.
fn write_stats<W: Write>(out: &mut W, stats: &SnowfallStats) -> io::Result<()> {
    serde_json::to_writer(&mut *out, stats)?;
    writeln!(out)?;
    out.flush()
}
