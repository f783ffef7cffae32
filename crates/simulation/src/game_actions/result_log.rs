//! Ring-buffer log of recently executed game actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64 `(GameAction, ActionResult)`
//! pairs so the HUD, agents and tests can see what happened to each request
//! without a separate error channel.

use bevy::prelude::*;

use super::{ActionResult, GameAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(GameAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair. If the buffer is full the oldest entry
    /// is evicted.
    pub fn push(&mut self, action: GameAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
    }

    pub fn last(&self) -> Option<&(GameAction, ActionResult)> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_actions::ActionRejection;

    #[test]
    fn push_keeps_latest_last() {
        let mut log = ActionResultLog::default();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);

        log.push(GameAction::Apply { row: 0, col: 0 }, ActionResult::ToolSelected);
        log.push(
            GameAction::Apply { row: 99, col: 0 },
            ActionResult::Rejected(ActionRejection::OutOfBounds),
        );
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.last().copied(),
            Some((
                GameAction::Apply { row: 99, col: 0 },
                ActionResult::Rejected(ActionRejection::OutOfBounds)
            ))
        );
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ActionResultLog::default();
        for i in 0..(MAX_ENTRIES as i32 + 10) {
            log.push(GameAction::Apply { row: i, col: 0 }, ActionResult::ToolSelected);
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].0, GameAction::Apply { row: 10, col: 0 });
        assert_eq!(
            log.last().map(|(action, _)| *action),
            Some(GameAction::Apply {
                row: MAX_ENTRIES as i32 + 9,
                col: 0
            })
        );
    }
}
