//! Action executor system: drains the [`ActionQueue`] once per frame and
//! applies every queued [`GameAction`] to the [`CityGridState`], recording
//! results in the [`ActionResultLog`].

use bevy::prelude::*;

use crate::ascii_map;
use crate::city_state::{ApplyOutcome, CityGridState};

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, ActionSource, GameAction, QueuedAction};

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut city: ResMut<CityGridState>,
) {
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let result = execute_single(queued, &mut city);
        log.push(queued.action, result);
    }
}

pub fn execute_single(queued: QueuedAction, city: &mut CityGridState) -> ActionResult {
    let source = source_tag(queued.source);
    match queued.action {
        GameAction::SelectTool { tool } => {
            if city.tool() != tool {
                debug!("[{source}] tool selected: {}", tool.label());
            }
            city.select_tool(tool);
            ActionResult::ToolSelected
        }
        GameAction::Apply { row, col } => {
            let outcome = city.apply(row, col);
            match outcome {
                ApplyOutcome::Placed { kind, price } => debug!(
                    "[{source}] placed {} at ({row}, {col}) for ${price}, balance ${}",
                    kind.label(),
                    city.balance()
                ),
                ApplyOutcome::Erased { previous, refund } if !previous.is_empty() => debug!(
                    "[{source}] erased {} at ({row}, {col}), refunded ${refund}, balance ${}",
                    previous.label(),
                    city.balance()
                ),
                ApplyOutcome::InsufficientFunds { kind, price } => trace!(
                    "[{source}] cannot afford {} (${price}) with balance ${}",
                    kind.label(),
                    city.balance()
                ),
                ApplyOutcome::OutOfBounds => {
                    trace!("[{source}] ignored apply outside the grid at ({row}, {col})")
                }
                _ => {}
            }
            if outcome.mutated() {
                trace!("grid after apply:\n{}", ascii_map::render(city.grid()));
            }
            outcome.into()
        }
    }
}

pub(crate) fn source_tag(source: ActionSource) -> &'static str {
    match source {
        ActionSource::Player => "player",
        ActionSource::Agent => "agent",
    }
}
