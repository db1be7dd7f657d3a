use bevy::prelude::*;

use simulation::config::Area;

/// Night-sky background behind the flakes.
pub const BACKGROUND: Color = Color::BLACK;

/// 2D camera centred on the origin. Snowfall screen space is mapped onto it
/// by `screen_to_world`.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Convert a snowfall screen-space point (origin top-left, y down) into
/// 2D world space (origin centre, y up) for an area of the given size.
pub fn screen_to_world(position: Vec2, area: Area) -> Vec2 {
    Vec2::new(
        position.x - area.width * 0.5,
        area.height * 0.5 - position.y,
    )
}
