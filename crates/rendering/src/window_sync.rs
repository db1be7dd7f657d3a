use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::config::Area;
use simulation::SnowfallArea;

/// Keep the snowfall bounds equal to the primary window's logical size.
///
/// Minimized windows report a zero size; those updates are skipped so the
/// field keeps its last valid area.
pub fn sync_area_to_window(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut area: ResMut<SnowfallArea>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let next = Area::new(window.width(), window.height());
    if next.validate().is_err() {
        return;
    }
    area.set_if_neq(SnowfallArea(next));
}
