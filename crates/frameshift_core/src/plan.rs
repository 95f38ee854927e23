// SPDX-License-Identifier: MIT OR Apache-2.0
//! Retiming planner: computes new keyframe times without mutating anything.

use crate::timeline::{same_time, Time, Timeline};
use serde::{Deserialize, Serialize};

/// Smallest gap incremental retiming will leave between two keys.
pub const MIN_GAP: Time = 1.0;

/// Retiming policy for gaps inside the selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetimeMode {
    /// Force every gap inside the range to exactly `amount` frames
    Absolute,
    /// Add `amount` to every gap inside the range, flooring at [`MIN_GAP`]
    Incremental,
}

/// A computed retime: original keyframe times paired with their targets.
///
/// Index 0 is the anchor (always unmoved), the final index is the last
/// keyframe on the track. Produced by [`plan_retime`], consumed by the
/// apply engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RetimePlan {
    /// Walked keyframe times, anchor through last, in track order
    pub original: Vec<Time>,
    /// New time for each walked keyframe
    pub target: Vec<Time>,
}

impl RetimePlan {
    /// Number of keyframes covered by the plan
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// True when the plan covers no keyframes
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Walk the track from `anchor` to `last` and compute each keyframe's
/// new time under the requested mode.
///
/// The anchor is the fixed reference point and keeps its time. Each
/// following key is placed relative to its predecessor's *new* time:
/// gaps whose left key sits before `range_end` are retimed, gaps at or
/// past `range_end` keep their original width.
pub fn plan_retime<T: Timeline + ?Sized>(
    timeline: &T,
    anchor: Time,
    last: Time,
    range_end: Time,
    amount: Time,
    mode: RetimeMode,
) -> RetimePlan {
    let mut original = vec![anchor];
    let mut target = vec![anchor];

    let mut current = anchor;
    while !same_time(current, last) {
        let Some(next) = timeline.next_key(current) else {
            break;
        };

        let gap = match mode {
            RetimeMode::Incremental => {
                let mut gap = next - current;
                if current < range_end {
                    gap += amount;
                    if gap < MIN_GAP {
                        gap = MIN_GAP;
                    }
                }
                gap
            }
            RetimeMode::Absolute => {
                if current < range_end {
                    amount
                } else {
                    next - current
                }
            }
        };

        target.push(target[target.len() - 1] + gap);
        original.push(next);
        current = next;
    }

    tracing::debug!(
        keys = original.len(),
        ?mode,
        amount,
        "planned retime from {anchor} to {last}"
    );

    RetimePlan { original, target }
}
