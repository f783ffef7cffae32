//! Primary mouse button → `GameAction::Apply`.

use bevy::prelude::*;

use simulation::game_actions::{ActionQueue, ActionSource, GameAction};

use super::types::CursorGridPos;

/// While the left button is held over the window, queue one apply per frame
/// for the hovered cell. Off-grid cells are queued too; the executor drops
/// them without touching the city.
pub fn handle_tool_input(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorGridPos>,
    mut queue: ResMut<ActionQueue>,
) {
    if !buttons.pressed(MouseButton::Left) || !cursor.over_window {
        return;
    }
    queue.push(
        ActionSource::Player,
        GameAction::Apply {
            row: cursor.row,
            col: cursor.col,
        },
    );
}
