//! The whole mutable game state: tile grid, cash balance and active tool.
//!
//! Every in-domain failure is a silent no-op. [`CityGridState::apply`] still
//! reports what happened through [`ApplyOutcome`] so callers can log it, but
//! nothing about an outcome requires handling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_HEIGHT, GRID_WIDTH, STARTING_BALANCE};
use crate::grid::{TileGrid, TileKind};
use crate::tools::BuildTool;

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGridState {
    pub grid: TileGrid,
    /// Signed on purpose: placement is gated on funds, but a balance assigned
    /// from outside may go negative and is kept as-is.
    pub balance: i64,
    pub tool: BuildTool,
}

impl Default for CityGridState {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT, STARTING_BALANCE)
    }
}

/// Result of a single [`CityGridState::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyOutcome {
    Placed { kind: TileKind, price: i64 },
    /// `previous` may be `Empty`, in which case `refund` is 0.
    Erased { previous: TileKind, refund: i64 },
    InsufficientFunds { kind: TileKind, price: i64 },
    OutOfBounds,
}

impl ApplyOutcome {
    /// True when the grid or balance may have changed.
    pub fn mutated(&self) -> bool {
        matches!(self, ApplyOutcome::Placed { .. } | ApplyOutcome::Erased { .. })
    }
}

impl CityGridState {
    pub fn new(width: usize, height: usize, balance: i64) -> Self {
        Self {
            grid: TileGrid::new(width, height),
            balance,
            tool: BuildTool::default(),
        }
    }

    pub fn select_tool(&mut self, tool: BuildTool) {
        self.tool = tool;
    }

    /// Apply the active tool at `(row, col)`.
    ///
    /// Erase refunds the price of whatever sits in the cell (0 for `Empty`)
    /// and clears it, regardless of balance. Placing charges the tool's price
    /// when the balance covers it and overwrites the cell without refunding
    /// the tile it replaces. Out-of-range coordinates change nothing.
    pub fn apply(&mut self, row: i32, col: i32) -> ApplyOutcome {
        let Some((row, col)) = self.grid.checked_cell(row, col) else {
            return ApplyOutcome::OutOfBounds;
        };

        match self.tool.tile_kind() {
            None => {
                let previous = self.grid.get(row, col);
                let refund = previous.price();
                // Wraps like the machine integer it models; erase never panics.
                self.balance = self.balance.wrapping_add(refund);
                self.grid.set(row, col, TileKind::Empty);
                ApplyOutcome::Erased { previous, refund }
            }
            Some(kind) => {
                let price = kind.price();
                if self.balance < price {
                    return ApplyOutcome::InsufficientFunds { kind, price };
                }
                self.grid.set(row, col, kind);
                self.balance -= price;
                ApplyOutcome::Placed { kind, price }
            }
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn tool(&self) -> BuildTool {
        self.tool
    }

    /// Tile at `(row, col)`, or `None` when out of range.
    pub fn tile(&self, row: usize, col: usize) -> Option<TileKind> {
        self.grid
            .in_bounds(row, col)
            .then(|| self.grid.get(row, col))
    }

    /// Owned copy of everything the presentation layer reads.
    pub fn snapshot(&self) -> CitySnapshot {
        CitySnapshot {
            width: self.grid.width,
            height: self.grid.height,
            balance: self.balance,
            tool: self.tool,
            tiles: self.grid.occupied().map(PlacedTile::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub row: usize,
    pub col: usize,
    pub kind: TileKind,
}

impl From<(usize, usize, TileKind)> for PlacedTile {
    fn from((row, col, kind): (usize, usize, TileKind)) -> Self {
        Self { row, col, kind }
    }
}

/// Read-only view of the city for drawing, logging and agents. Only
/// non-empty cells are listed, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    pub width: usize,
    pub height: usize,
    pub balance: i64,
    pub tool: BuildTool,
    pub tiles: Vec<PlacedTile>,
}
