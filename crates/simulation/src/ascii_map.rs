//! ASCII rendering of the tile grid, one character per cell and one line per
//! row. Built on demand; used for debug logging and test assertions.

use crate::grid::{TileGrid, TileKind};

pub fn tile_to_char(kind: TileKind) -> char {
    match kind {
        TileKind::Empty => '.',
        TileKind::Road => '#',
        TileKind::House => 'H',
        TileKind::Hospital => '+',
        TileKind::Farm => 'F',
    }
}

pub fn render(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for row in 0..grid.height {
        out.extend((0..grid.width).map(|col| tile_to_char(grid.get(row, col))));
        out.push('\n');
    }
    out
}
