//! Filled disc per snowflake.
//!
//! One `Mesh2d` entity is spawned per flake at startup, sharing a unit circle
//! mesh and a single white material. Each frame the transforms are moved to
//! the flake's position and scaled by its radius. The field size is fixed,
//! so entities are never spawned or despawned afterwards.

use bevy::prelude::*;

use simulation::Snowfall;

use crate::camera::screen_to_world;

/// Flake colour.
const FLAKE_COLOR: Color = Color::WHITE;

/// Segment count of the shared circle mesh. Flakes are at most a few pixels wide.
const CIRCLE_RESOLUTION: u32 = 16;

/// Index of the snowflake this entity draws.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlakeSprite(pub usize);

/// Spawn one disc entity per flake. Runs after the snowfall is built.
pub fn spawn_flake_sprites(
    mut commands: Commands,
    snowfall: Option<Res<Snowfall>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(snowfall) = snowfall else {
        warn!("Snowflake render: no snowfall to draw");
        return;
    };

    let mesh = meshes.add(Circle::new(1.0).mesh().resolution(CIRCLE_RESOLUTION));
    let material = materials.add(FLAKE_COLOR);
    let area = snowfall.area();

    for (i, view) in snowfall.particles().enumerate() {
        let pos = screen_to_world(view.position, area);
        commands.spawn((
            FlakeSprite(i),
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(pos.extend(0.0)).with_scale(Vec3::splat(view.radius)),
        ));
    }
}

/// Move each disc to its flake's latest position.
pub fn update_flake_sprites(
    snowfall: Option<Res<Snowfall>>,
    mut sprites: Query<(&FlakeSprite, &mut Transform)>,
) {
    let Some(snowfall) = snowfall else {
        return;
    };
    if !snowfall.is_changed() {
        return;
    }

    let area = snowfall.area();
    for (sprite, mut transform) in &mut sprites {
        let Some(view) = snowfall.particle(sprite.0) else {
            continue;
        };
        let pos = screen_to_world(view.position, area);
        transform.translation = pos.extend(0.0);
        transform.scale = Vec3::splat(view.radius);
    }
}
