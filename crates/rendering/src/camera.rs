use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use simulation::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Fixed 2D camera centred on the screen, so one world unit is one pixel.
/// Tonemapping is off so tile colors reach the screen unchanged.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Tonemapping::None));
}

/// Screen pixel (origin top-left, y down) to world position (origin at the
/// screen centre, y up).
pub fn pixel_to_world(pixel: Vec2) -> Vec2 {
    Vec2::new(
        pixel.x - SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0 - pixel.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_screen_edges() {
        assert_eq!(pixel_to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(pixel_to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(pixel_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }
}
