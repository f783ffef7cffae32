use bevy::prelude::*;

pub mod ascii_map;
pub mod city_state;
pub mod config;
pub mod game_actions;
pub mod grid;
pub mod keybindings;
pub mod simulation_sets;
pub mod tools;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::CityUpdateSet;

use city_state::CityGridState;

/// Log the starting conditions once so a run's log shows what it began with.
fn log_starting_state(city: Res<CityGridState>) {
    info!(
        "city ready: {}x{} grid, balance ${}, tool {}",
        city.grid().width,
        city.grid().height,
        city.balance(),
        city.tool().label()
    );
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // init_resource keeps a CityGridState inserted before the plugin
        app.init_resource::<CityGridState>()
            .add_systems(Startup, log_starting_state);

        app.add_plugins((
            simulation_sets::CityUpdateSetsPlugin,
            keybindings::KeyBindingsPlugin,
            game_actions::GameActionsPlugin,
        ));
    }
}
