//! Tile drawing: one sprite per grid cell, spawned once and refreshed from
//! `CityGridState` whenever it changes.
//!
//! Sprites are anchored top-left at `(col * TILE_SIZE, row * TILE_SIZE)` and
//! sized by the tile's footprint, so a hospital spills over its neighbours.
//! Z grows in row-major order to reproduce painter's order: later cells draw
//! over earlier ones.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use simulation::city_state::CityGridState;
use simulation::grid::{TileGrid, TileKind};

use crate::camera::pixel_to_world;
use crate::tile_colors::tile_color;

const Z_STEP: f32 = 0.001;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSprite {
    pub row: usize,
    pub col: usize,
}

pub fn spawn_tile_sprites(mut commands: Commands, city: Res<CityGridState>) {
    let grid = city.grid();
    for row in 0..grid.height {
        for col in 0..grid.width {
            let pos = pixel_to_world(TileGrid::cell_to_pixel(row, col));
            let z = grid.index(row, col) as f32 * Z_STEP;
            commands.spawn((
                TileSprite { row, col },
                Sprite {
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                Transform::from_xyz(pos.x, pos.y, z),
                Visibility::Hidden,
            ));
        }
    }
}

/// Mirror the grid into the sprites. Skips frames where the state did not
/// change.
pub fn sync_tile_sprites(
    city: Res<CityGridState>,
    mut sprites: Query<(&TileSprite, &mut Sprite, &mut Visibility)>,
) {
    if !city.is_changed() {
        return;
    }
    for (tile, mut sprite, mut visibility) in &mut sprites {
        let kind = city.tile(tile.row, tile.col).unwrap_or(TileKind::Empty);
        match (tile_color(kind), kind.footprint()) {
            (Some(color), Some(footprint)) => {
                sprite.color = color;
                sprite.custom_size = Some(Vec2::new(footprint.w as f32, footprint.h as f32));
                *visibility = Visibility::Visible;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }
}

pub struct TileRenderPlugin;

impl Plugin for TileRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_tile_sprites).add_systems(
            Update,
            sync_tile_sprites.in_set(simulation::CityUpdateSet::Visual),
        );
    }
}
