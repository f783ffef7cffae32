//! Human-readable key-code labels.

use bevy::prelude::*;

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Digit0 => "0",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::Digit7 => "7",
        KeyCode::Digit8 => "8",
        KeyCode::Digit9 => "9",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_labels() {
        assert_eq!(keycode_label(KeyCode::Digit0), "0");
        assert_eq!(keycode_label(KeyCode::Digit4), "4");
        assert_eq!(keycode_label(KeyCode::Digit9), "9");
    }

    #[test]
    fn unknown_key_label() {
        assert_eq!(keycode_label(KeyCode::KeyE), "???");
    }
}
