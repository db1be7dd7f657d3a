//! Long-run properties of the snowfall field.
//!
//! These tests drive `Snowfall` directly (no Bevy app) for many simulated
//! seconds and check the invariants the renderer relies on:
//! - identical seeds produce identical trajectories
//! - the field size never changes
//! - radius and duration stay fixed per flake
//! - vertical position only decreases through a respawn to `-2 * max_radius`
//!
//! Run: cargo test -p simulation --test snowfall_long_run

use simulation::config::{Area, SnowfallConfig};
use simulation::{FlakeView, SimRng, Snowfall};

const DT: f32 = 1.0 / 60.0;

fn run(seed: u64, ticks: usize) -> Vec<Vec<FlakeView>> {
    let mut rng = SimRng::from_seed_u64(seed);
    let mut snowfall =
        Snowfall::initialize(SnowfallConfig::default(), Area::default(), &mut rng.0)
            .expect("default config is valid");

    let mut frames = Vec::with_capacity(ticks + 1);
    frames.push(snowfall.particles().collect());
    for _ in 0..ticks {
        snowfall.advance(DT, &mut rng.0).expect("dt is valid");
        frames.push(snowfall.particles().collect());
    }
    frames
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_same_seed_same_trajectories() {
    let a = run(2024, 600);
    let b = run(2024, 600);
    assert_eq!(a, b);
}

#[test]
fn test_different_seed_different_trajectories() {
    let a = run(1, 10);
    let b = run(2, 10);
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Field invariants over ten simulated minutes
// ---------------------------------------------------------------------------

#[test]
fn test_field_invariants_hold_over_long_run() {
    let config = SnowfallConfig::default();
    let area = Area::default();
    let mut rng = SimRng::from_seed_u64(77);
    let mut snowfall = Snowfall::initialize(config.clone(), area, &mut rng.0).unwrap();

    let radii: Vec<f32> = snowfall.flakes().iter().map(|f| f.radius()).collect();
    let durations: Vec<f32> = snowfall.flakes().iter().map(|f| f.duration()).collect();
    let respawn_y = -2.0 * config.max_radius;

    for _ in 0..36_000 {
        let before: Vec<f32> = snowfall.flakes().iter().map(|f| f.y).collect();
        snowfall.advance(DT, &mut rng.0).unwrap();

        assert_eq!(snowfall.len(), config.particle_count);
        for (i, f) in snowfall.flakes().iter().enumerate() {
            assert_eq!(f.radius(), radii[i]);
            assert_eq!(f.duration(), durations[i]);
            assert!(f.radius() > 0.0);
            assert!(f.x.is_finite() && f.y.is_finite());
            if f.y < before[i] {
                assert_eq!(f.y, respawn_y, "flake {i} moved up without respawning");
            }
            assert!(f.y <= area.height + config.respawn_margin());
        }
    }

    let stats = snowfall.stats();
    assert_eq!(stats.ticks, 36_000);
    assert!(stats.respawns >= config.particle_count as u64);
}

#[test]
fn test_respawned_flakes_enter_inside_width() {
    let config = SnowfallConfig {
        drift_scale: 0.0,
        ..Default::default()
    };
    let area = Area::new(300.0, 50.0);
    let mut rng = SimRng::from_seed_u64(5);
    let mut snowfall = Snowfall::initialize(config.clone(), area, &mut rng.0).unwrap();

    for _ in 0..6_000 {
        snowfall.advance(DT, &mut rng.0).unwrap();
        for f in snowfall.flakes() {
            if f.y == -config.respawn_margin() {
                assert!((0.0..area.width).contains(&f.x), "x = {}", f.x);
            }
        }
    }
}

#[test]
fn test_fall_of_one_pixel_over_five_seconds_at_depth_five() {
    // fall_speed 1.0: y grows by dt / duration per tick.
    let config = SnowfallConfig {
        particle_count: 1,
        fall_speed: 1.0,
        duration_min: 4.999,
        duration_max: 5.0,
        ..Default::default()
    };
    let area = Area::default();
    let mut rng = SimRng::from_seed_u64(12);
    let mut snowfall = Snowfall::initialize(config, area, &mut rng.0).unwrap();
    let start = snowfall.flakes()[0].y;
    let duration = snowfall.flakes()[0].duration();

    for _ in 0..300 {
        snowfall.advance(DT, &mut rng.0).unwrap();
    }

    let fallen = snowfall.flakes()[0].y - start;
    let expected = 300.0 * DT / duration;
    assert!((fallen - expected).abs() < 1e-2, "fell {fallen}, expected {expected}");
    assert!((fallen - 1.0).abs() < 1e-2);
}
