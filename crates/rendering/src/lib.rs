use bevy::prelude::*;

pub mod camera;
pub mod snowflake_render;
pub mod window_sync;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(camera::BACKGROUND))
            .add_systems(
                Startup,
                (camera::setup_camera, snowflake_render::spawn_flake_sprites)
                    .chain()
                    .after(simulation::snowfall::init_snowfall),
            )
            .add_systems(
                Update,
                (
                    window_sync::sync_area_to_window,
                    snowflake_render::update_flake_sprites,
                ),
            );
    }
}
