use bevy::prelude::*;

use simulation::city_state::CityGridState;
use simulation::game_actions::{ActionQueue, ActionSource, GameAction};
use simulation::keybindings::KeyBindings;

/// Selector keys are level-triggered: holding a key keeps its tool selected.
/// When several are held the first in legend order wins.
pub fn keyboard_tool_switch(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    city: Res<CityGridState>,
    mut queue: ResMut<ActionQueue>,
) {
    let Some(tool) = bindings.held_tool(&keys) else {
        return;
    };
    // Re-selecting the active tool is a no-op; skip queueing it every frame.
    if tool == city.tool() {
        return;
    }
    queue.push(ActionSource::Player, GameAction::SelectTool { tool });
}
