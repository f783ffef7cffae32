//! Debug HUD: tool legend, selected tool and balance drawn as plain text in
//! the top-left corner every frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::city_state::CityGridState;
use simulation::keybindings::KeyBindings;

const HUD_ORIGIN: egui::Pos2 = egui::pos2(10.0, 10.0);
const LINE_HEIGHT: f32 = 20.0;

/// Top-left corner of HUD line `index`: (10,10), (10,30), (10,50).
pub fn hud_line_origin(index: usize) -> egui::Pos2 {
    HUD_ORIGIN + egui::vec2(0.0, LINE_HEIGHT * index as f32)
}

/// The three HUD lines, top to bottom.
pub fn hud_lines(city: &CityGridState, bindings: &KeyBindings) -> [String; 3] {
    [
        bindings.legend(),
        format!("Selected Tool: {}", city.tool().label()),
        format!("Balance: ${}", city.balance()),
    ]
}

pub fn hud_ui(mut contexts: EguiContexts, city: Res<CityGridState>, bindings: Res<KeyBindings>) {
    let ctx = contexts.ctx_mut();
    // One area per line so each row sits at an exact pixel offset.
    for (index, line) in hud_lines(&city, &bindings).into_iter().enumerate() {
        egui::Area::new(egui::Id::new(("debug_hud", index)))
            .fixed_pos(hud_line_origin(index))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(line)
                        .monospace()
                        .color(egui::Color32::WHITE),
                );
            });
    }
}
