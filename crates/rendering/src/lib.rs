use bevy::prelude::*;

pub mod camera;
pub mod input;
pub mod tile_colors;
pub mod tile_render;

use input::CityInputPlugin;
use tile_render::TileRenderPlugin;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(tile_colors::background_color()))
            .add_systems(Startup, camera::setup_camera)
            .add_plugins((CityInputPlugin, TileRenderPlugin));
    }
}
