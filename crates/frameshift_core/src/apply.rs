// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered apply engine: writes a retime plan back without collisions.

use crate::plan::RetimePlan;
use crate::timeline::{same_time, RetimeError, Time, Timeline, TIME_EPSILON};

/// Write every planned move into the timeline.
///
/// Moves are ordered so that a keyframe is never placed onto or past a
/// position still occupied by an unmoved key: a move whose target stays
/// strictly before the next key's untouched time is applied at once,
/// while a shrinking move is deferred until the following key is out of
/// the way. A rejected move aborts the whole operation.
pub fn apply_plan<T: Timeline + ?Sized>(
    timeline: &mut T,
    plan: &RetimePlan,
) -> Result<(), RetimeError> {
    apply_from(timeline, plan, 0)
}

fn apply_from<T: Timeline + ?Sized>(
    timeline: &mut T,
    plan: &RetimePlan,
    index: usize,
) -> Result<(), RetimeError> {
    if index >= plan.len() {
        return Ok(());
    }

    let from = plan.original[index];
    let to = plan.target[index];

    match plan.original.get(index + 1) {
        Some(&next) if to >= next - TIME_EPSILON => {
            // Target lands at or past the next untouched key: clear it first.
            apply_from(timeline, plan, index + 1)?;
            move_if_needed(timeline, from, to)
        }
        _ => {
            move_if_needed(timeline, from, to)?;
            apply_from(timeline, plan, index + 1)
        }
    }
}

fn move_if_needed<T: Timeline + ?Sized>(
    timeline: &mut T,
    from: Time,
    to: Time,
) -> Result<(), RetimeError> {
    if same_time(from, to) {
        return Ok(());
    }
    tracing::debug!("moving keyframe {from} -> {to}");
    timeline.move_key(from, to)
}
