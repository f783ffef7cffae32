use bevy::prelude::*;

/// Grid cell under the mouse cursor, refreshed every frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorGridPos {
    pub row: i32,
    pub col: i32,
    /// The cursor is over the window. The cell may still be off the grid.
    pub over_window: bool,
}
