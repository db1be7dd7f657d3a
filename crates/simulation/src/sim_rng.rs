//! Deterministic snowfall RNG resource and the random-source contract.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Every
//! operation that draws takes a `&mut impl RandomSource` explicitly, so the
//! whole simulation consumes one ordered stream and identical seeds produce
//! identical trajectories.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// The two statistical draws the motion model needs.
///
/// Callers must pass `min < max` to `uniform`; the snowfall config and area
/// validation guarantee this for every draw the crate makes.
pub trait RandomSource {
    /// Uniform sample in `[min, max)`.
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// Gaussian sample with the given mean and standard deviation.
    fn normal(&mut self, mean: f32, std_dev: f32) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        self.gen_range(min..max)
    }

    fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        let z: f32 = self.sample(StandardNormal);
        mean + std_dev * z
    }
}

// ---------------------------------------------------------------------------
// SimRng resource
// ---------------------------------------------------------------------------

/// Deterministic RNG resource for all snowfall randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and pass `&mut rng.0`
/// (a `ChaCha8Rng`, which implements `RandomSource` through `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        // Keep a seed the host inserted before the plugin.
        app.init_resource::<SimRng>();
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
