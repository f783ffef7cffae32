//! Per-frame ordering via `SystemSet` phases.
//!
//! ```text
//! Input  →  Actions  →  Visual
//! ```
//!
//! * **Input** – reads mouse/keyboard state and pushes `GameAction`s. Never
//!   touches `CityGridState` directly.
//! * **Actions** – the action executor; the only writer of `CityGridState`.
//! * **Visual** – tile sprites and HUD. Read-only on `CityGridState`, so they
//!   always draw the state produced earlier in the same frame.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CityUpdateSet {
    Input,
    Actions,
    Visual,
}

/// Chains the `Update` phases. Added by `SimulationPlugin`.
pub struct CityUpdateSetsPlugin;

impl Plugin for CityUpdateSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CityUpdateSet::Input,
                CityUpdateSet::Actions,
                CityUpdateSet::Visual,
            )
                .chain(),
        );
    }
}
