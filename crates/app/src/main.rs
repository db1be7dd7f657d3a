use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::config::{Area, DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH};
use simulation::{SimRng, SnowfallArea};

mod headless;

/// Environment variable holding an optional `u64` seed for the snowfall RNG.
const SEED_ENV: &str = "SNOWFALL_SEED";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--headless") {
        let ticks = args
            .get(pos + 1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(headless::DEFAULT_TICKS);
        headless::run_headless(seed_from_env(), ticks);
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Snow".to_string(),
            resolution: (DEFAULT_AREA_WIDTH, DEFAULT_AREA_HEIGHT).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(SnowfallArea(Area::new(DEFAULT_AREA_WIDTH, DEFAULT_AREA_HEIGHT)));

    if let Some(seed) = seed_from_env() {
        app.insert_resource(SimRng::from_seed_u64(seed));
    }

    app.add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin));

    app.run();
}

/// Read `SNOWFALL_SEED`, ignoring values that are not a valid `u64`.
fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            eprintln!("{SEED_ENV}={raw:?} is not a valid seed ({e}); using the default");
            None
        }
    }
}
