//! Input handling: turns mouse and keyboard state into `GameAction`s.
//!
//! - `types`: `CursorGridPos`
//! - `cursor`: cursor → grid cell tracking
//! - `keyboard`: tool selector keys
//! - `tool_handler`: primary-button placement/erase

mod cursor;
mod keyboard;
mod tool_handler;
mod types;


pub use types::CursorGridPos;

pub use cursor::{cursor_to_cell, update_cursor_grid_pos};
pub use keyboard::keyboard_tool_switch;
pub use tool_handler::handle_tool_input;

use bevy::prelude::*;
use simulation::CityUpdateSet;

/// Registers the cursor resource and the per-frame input systems.
pub struct CityInputPlugin;

impl Plugin for CityInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorGridPos>().add_systems(
            Update,
            (
                update_cursor_grid_pos,
                handle_tool_input.after(update_cursor_grid_pos),
                // A click uses the tool active before this frame's key press
                keyboard_tool_switch.after(handle_tool_input),
            )
                .in_set(CityUpdateSet::Input),
        );
    }
}
