use serde::{Deserialize, Serialize};

use crate::tools::BuildTool;

/// A single mutation request against the city. Input systems, agents and
/// tests all go through these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameAction {
    SelectTool { tool: BuildTool },
    /// Signed so that unclamped cursor conversions can be queued directly;
    /// the executor rejects anything outside the grid.
    Apply { row: i32, col: i32 },
}
