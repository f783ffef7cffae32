//! # TestCity: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `SimulationPlugin` so the
//! full action pipeline (queue → executor → log) runs without a window.

use bevy::app::App;
use bevy::prelude::*;

use crate::ascii_map;
use crate::city_state::CityGridState;
use crate::config::{GRID_HEIGHT, GRID_WIDTH, STARTING_BALANCE};
use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use crate::grid::TileKind;
use crate::tools::BuildTool;
use crate::SimulationPlugin;

pub struct TestCity {
    app: App,
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCity {
    /// A fresh 20x15 city with the starting balance and the Road tool.
    pub fn new() -> Self {
        Self::with_state(CityGridState::new(
            GRID_WIDTH,
            GRID_HEIGHT,
            STARTING_BALANCE,
        ))
    }

    /// Start from an explicit state (custom grid size, balance, tiles).
    pub fn with_state(state: CityGridState) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so init_resource keeps it.
        app.insert_resource(state);
        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Overwrite the balance directly, bypassing the action pipeline.
    pub fn with_balance(mut self, balance: i64) -> Self {
        self.state_mut().balance = balance;
        self
    }

    /// Put a tile in a cell without charging for it.
    pub fn with_tile(mut self, row: usize, col: usize, kind: TileKind) -> Self {
        let mut state = self.state_mut();
        if state.grid.in_bounds(row, col) {
            state.grid.set(row, col, kind);
        }
        self
    }

    pub fn with_tool(mut self, tool: BuildTool) -> Self {
        self.state_mut().select_tool(tool);
        self
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    /// Queue an action as the player would; it runs on the next `tick`.
    pub fn push(&mut self, action: GameAction) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::Agent, action);
        self
    }

    /// Queue and immediately execute a tool selection.
    pub fn select_tool(&mut self, tool: BuildTool) -> &mut Self {
        self.push(GameAction::SelectTool { tool }).tick(1)
    }

    /// Queue and immediately execute an apply.
    pub fn apply(&mut self, row: i32, col: i32) -> &mut Self {
        self.push(GameAction::Apply { row, col }).tick(1)
    }

    /// Run `n` frames.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn state(&self) -> &CityGridState {
        self.resource::<CityGridState>()
    }

    fn state_mut(&mut self) -> Mut<'_, CityGridState> {
        self.app.world_mut().resource_mut::<CityGridState>()
    }

    pub fn balance(&self) -> i64 {
        self.state().balance()
    }

    pub fn tool(&self) -> BuildTool {
        self.state().tool()
    }

    /// Tile at `(row, col)`; panics when out of range.
    pub fn tile(&self, row: usize, col: usize) -> TileKind {
        self.state()
            .tile(row, col)
            .unwrap_or_else(|| panic!("({row}, {col}) is outside the grid"))
    }

    pub fn last_result(&self) -> Option<ActionResult> {
        self.resource::<ActionResultLog>().last().map(|(_, r)| *r)
    }

    pub fn ascii(&self) -> String {
        ascii_map::render(self.state().grid())
    }
}
