use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TILE_SIZE;

/// What occupies a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Road,
    House,
    Hospital,
    Farm,
}

/// Nominal draw size of a placed tile, in pixels. Purely cosmetic: a 96 px
/// hospital still occupies one cell and may overlap its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub w: u32,
    pub h: u32,
}

impl TileKind {
    /// Every kind that can be built, in tool-legend order.
    pub const PLACEABLE: [TileKind; 4] = [
        TileKind::Road,
        TileKind::House,
        TileKind::Hospital,
        TileKind::Farm,
    ];

    /// Build cost. Erasing refunds the same amount.
    pub fn price(self) -> i64 {
        match self {
            TileKind::Empty => 0,
            TileKind::Road => 2,
            TileKind::House => 50,
            TileKind::Hospital => 20,
            TileKind::Farm => 20,
        }
    }

    /// `None` for `Empty`, which is never drawn.
    pub fn footprint(self) -> Option<Footprint> {
        let (w, h) = match self {
            TileKind::Empty => return None,
            TileKind::Road => (32, 32),
            TileKind::House => (64, 64),
            TileKind::Hospital => (96, 96),
            TileKind::Farm => (48, 48),
        };
        Some(Footprint { w, h })
    }

    pub fn label(self) -> &'static str {
        match self {
            TileKind::Empty => "Empty",
            TileKind::Road => "Road",
            TileKind::House => "House",
            TileKind::Hospital => "Hospital",
            TileKind::Farm => "Farm",
        }
    }

    pub fn is_empty(self) -> bool {
        self == TileKind::Empty
    }
}

/// Fixed-size tile grid, row-major, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub cells: Vec<TileKind>,
    pub width: usize,
    pub height: usize,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![TileKind::Empty; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Validate signed coordinates (e.g. straight from a cursor conversion).
    pub fn checked_cell(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.in_bounds(row, col).then_some((row, col))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> TileKind {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, kind: TileKind) {
        let idx = self.index(row, col);
        self.cells[idx] = kind;
    }

    /// Non-empty cells in row-major order as `(row, col, kind)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| !kind.is_empty())
            .map(|(idx, &kind)| (idx / self.width, idx % self.width, kind))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Screen pixel (origin top-left, y down) to `(row, col)`. Floors, so
    /// pixels left of or above the grid give negative coordinates.
    pub fn pixel_to_cell(px: f32, py: f32) -> (i32, i32) {
        let tile = TILE_SIZE as f32;
        let col = (px / tile).floor() as i32;
        let row = (py / tile).floor() as i32;
        (row, col)
    }

    /// Top-left pixel of a cell.
    pub fn cell_to_pixel(row: usize, col: usize) -> Vec2 {
        Vec2::new((col as u32 * TILE_SIZE) as f32, (row as u32 * TILE_SIZE) as f32)
    }
}
