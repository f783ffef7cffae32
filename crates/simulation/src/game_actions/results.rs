use serde::{Deserialize, Serialize};

use crate::city_state::ApplyOutcome;
use crate::grid::TileKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    ToolSelected,
    Applied(ApplyOutcome),
    /// The action was ignored; the city is unchanged.
    Rejected(ActionRejection),
}

impl ActionResult {
    /// Returns `true` when the action took effect.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Rejected(_))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionRejection {
    OutOfBounds,
    InsufficientFunds { kind: TileKind, price: i64 },
}

impl From<ApplyOutcome> for ActionResult {
    fn from(outcome: ApplyOutcome) -> Self {
        match outcome {
            ApplyOutcome::OutOfBounds => ActionResult::Rejected(ActionRejection::OutOfBounds),
            ApplyOutcome::InsufficientFunds { kind, price } => {
                ActionResult::Rejected(ActionRejection::InsufficientFunds { kind, price })
            }
            applied => ActionResult::Applied(applied),
        }
    }
}
