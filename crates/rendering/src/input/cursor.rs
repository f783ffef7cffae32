use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::grid::TileGrid;

use super::types::CursorGridPos;

/// Window cursor position (logical pixels, origin top-left) to `(row, col)`.
pub fn cursor_to_cell(cursor: Vec2) -> (i32, i32) {
    TileGrid::pixel_to_cell(cursor.x, cursor.y)
}

pub fn update_cursor_grid_pos(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor: ResMut<CursorGridPos>,
) {
    let position = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position());

    let Some(position) = position else {
        cursor.over_window = false;
        return;
    };

    let (row, col) = cursor_to_cell(position);
    cursor.row = row;
    cursor.col = col;
    cursor.over_window = true;
}
