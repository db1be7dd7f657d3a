//! Snowflake motion model.
//!
//! Each flake couples a horizontal `Tween` with a vertical position. The
//! tween's duration is the flake's depth: it sets the rendered radius
//! (`max_radius / duration`), how slowly the flake sways, and how slowly it
//! falls. Flakes that fall fully below the area respawn above it with a new
//! horizontal position; they are never removed.

mod lifecycle;
pub mod types;

pub use types::{Snowflake, UpdateOutcome};
