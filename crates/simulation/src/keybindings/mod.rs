//! Configurable tool-selector keys.
//!
//! Provides a `KeyBindings` resource mapping every build tool to a key.
//! Input systems read from this resource instead of hardcoding `KeyCode`
//! values, and the HUD builds its tool legend from it.

mod bindings;
pub(crate) mod key_helpers;

pub use bindings::{KeyBinding, KeyBindings, KeyBindingsPlugin};
pub use key_helpers::keycode_label;
