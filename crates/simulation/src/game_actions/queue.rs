use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub source: ActionSource,
    pub action: GameAction,
}

/// Actions waiting for the next executor pass, in arrival order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: GameAction) {
        self.pending.push(QueuedAction { source, action });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::BuildTool;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue = ActionQueue::default();
        queue.push(
            ActionSource::Player,
            GameAction::SelectTool {
                tool: BuildTool::Farm,
            },
        );
        queue.push(ActionSource::Agent, GameAction::Apply { row: 1, col: 2 });
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert!(queue.is_empty());
        assert_eq!(drained[0].source, ActionSource::Player);
        assert_eq!(drained[1].action, GameAction::Apply { row: 1, col: 2 });
    }
}
