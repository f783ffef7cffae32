//! Key binding types, the `KeyBindings` resource, and its plugin.

use bevy::prelude::*;

use super::key_helpers::keycode_label;
use crate::tools::BuildTool;

/// A single selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
}

impl KeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self { key }
    }

    /// Check if this binding's key is currently held.
    pub fn pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.pressed(self.key)
    }

    /// Human-readable label (e.g. "0").
    pub fn display_label(self) -> &'static str {
        keycode_label(self.key)
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

/// One selector key per build tool.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub tool_erase: KeyBinding,
    pub tool_road: KeyBinding,
    pub tool_house: KeyBinding,
    pub tool_hospital: KeyBinding,
    pub tool_farm: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_erase: KeyBinding::simple(KeyCode::Digit0),
            tool_road: KeyBinding::simple(KeyCode::Digit1),
            tool_house: KeyBinding::simple(KeyCode::Digit2),
            tool_hospital: KeyBinding::simple(KeyCode::Digit3),
            tool_farm: KeyBinding::simple(KeyCode::Digit4),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, tool: BuildTool) -> KeyBinding {
        match tool {
            BuildTool::Erase => self.tool_erase,
            BuildTool::Road => self.tool_road,
            BuildTool::House => self.tool_house,
            BuildTool::Hospital => self.tool_hospital,
            BuildTool::Farm => self.tool_farm,
        }
    }

    /// First tool whose key is held, checked in legend order (Erase, Road,
    /// House, Hospital, Farm). Holding several keys picks the earliest.
    pub fn held_tool(&self, keys: &ButtonInput<KeyCode>) -> Option<BuildTool> {
        BuildTool::ALL
            .into_iter()
            .find(|&tool| self.get(tool).pressed(keys))
    }

    /// Tool legend for the HUD, e.g. "Tools: 0-Erase 1-Road 2-House ...".
    pub fn legend(&self) -> String {
        let entries: Vec<String> = BuildTool::ALL
            .iter()
            .map(|&tool| format!("{}-{}", self.get(tool).display_label(), tool.label()))
            .collect();
        format!("Tools: {}", entries.join(" "))
    }
}

pub struct KeyBindingsPlugin;

impl Plugin for KeyBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_legend_matches_digit_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.legend(),
            "Tools: 0-Erase 1-Road 2-House 3-Hospital 4-Farm"
        );
    }

    #[test]
    fn held_tool_prefers_legend_order() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        assert_eq!(bindings.held_tool(&keys), None);

        keys.press(KeyCode::Digit4);
        assert_eq!(bindings.held_tool(&keys), Some(BuildTool::Farm));

        keys.press(KeyCode::Digit2);
        assert_eq!(bindings.held_tool(&keys), Some(BuildTool::House));

        keys.press(KeyCode::Digit0);
        assert_eq!(bindings.held_tool(&keys), Some(BuildTool::Erase));
    }

    #[test]
    fn modifiers_do_not_block_selection() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ShiftRight);
        keys.press(KeyCode::Digit3);
        assert_eq!(bindings.held_tool(&keys), Some(BuildTool::Hospital));
        assert_eq!(bindings.tool_hospital.display_label(), "3");
    }
}
