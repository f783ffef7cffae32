pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const TILE_SIZE: u32 = 32;
pub const GRID_WIDTH: usize = 20;
pub const GRID_HEIGHT: usize = 15;
pub const STARTING_BALANCE: i64 = 1000;
pub const WINDOW_TITLE: &str = "City Builder Mayor Game";

/// Pixel extent covered by the grid (640 x 480). Clicks in the strip between
/// the grid edge and the screen edge map to out-of-bounds cells.
pub const GRID_PIXEL_WIDTH: u32 = GRID_WIDTH as u32 * TILE_SIZE;
pub const GRID_PIXEL_HEIGHT: u32 = GRID_HEIGHT as u32 * TILE_SIZE;
