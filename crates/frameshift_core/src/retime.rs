// SPDX-License-Identifier: MIT OR Apache-2.0
//! Retime entry point: anchor resolution, planning and apply in one call.

use crate::apply::apply_plan;
use crate::plan::{plan_retime, RetimeMode};
use crate::timeline::{RetimeError, Time, Timeline};
use serde::{Deserialize, Serialize};

/// One user retiming action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetimeRequest {
    /// Signed step size, in frames
    pub amount: Time,
    /// Gap policy inside the selected range
    pub mode: RetimeMode,
    /// Jump the playhead to the key after the anchor once done
    pub advance_to_next: bool,
}

impl RetimeRequest {
    /// Force gaps in the selected range to `amount` frames
    pub fn absolute(amount: Time) -> Self {
        Self {
            amount,
            mode: RetimeMode::Absolute,
            advance_to_next: false,
        }
    }

    /// Grow or shrink gaps in the selected range by `amount` frames
    pub fn incremental(amount: Time) -> Self {
        Self {
            amount,
            mode: RetimeMode::Incremental,
            advance_to_next: false,
        }
    }

    /// Set whether the playhead should advance past the anchor afterwards
    pub fn with_advance_to_next(mut self, advance: bool) -> Self {
        self.advance_to_next = advance;
        self
    }
}

/// Resolve the first keyframe to retime from.
///
/// A key sitting exactly at `range_start` wins; otherwise the nearest
/// preceding key is the anchor. An empty track and a range with nothing
/// at or before its start are reported identically.
pub fn resolve_anchor<T: Timeline + ?Sized>(
    timeline: &T,
    range_start: Time,
) -> Result<Time, RetimeError> {
    if let Some(t) = timeline.key_at(range_start) {
        return Ok(t);
    }
    timeline
        .previous_key(range_start)
        .ok_or(RetimeError::NoKeyframes)
}

/// Retime the selected range of the timeline in one undoable action.
///
/// Resolves the anchor from the current selection, plans new times for
/// every key from the anchor through the last key on the track, applies
/// the plan collision-free, then repositions the playhead. Fails before
/// any mutation when no anchor can be resolved; a rejected move fails
/// the operation mid-apply and is left to the host's undo to restore.
pub fn retime<T: Timeline + ?Sized>(
    timeline: &mut T,
    request: &RetimeRequest,
) -> Result<(), RetimeError> {
    let (range_start, range_end) = timeline.selected_range();
    let anchor = resolve_anchor(timeline, range_start)?;
    let last = timeline.last_key().ok_or(RetimeError::NoKeyframes)?;

    let plan = plan_retime(
        timeline,
        anchor,
        last,
        range_end,
        request.amount,
        request.mode,
    );

    if plan.len() > 1 {
        apply_plan(timeline, &plan)?;
    }

    // The anchor and everything before it never move, so the first key
    // read back here is the same one the selection was tested against.
    let first = timeline.first_key().ok_or(RetimeError::NoKeyframes)?;
    if request.advance_to_next && range_start >= first {
        match timeline.next_key(anchor) {
            Some(next) => timeline.set_current_time(next),
            None => timeline.set_current_time(anchor),
        }
    } else if range_end > first {
        timeline.set_current_time(anchor);
    } else {
        timeline.set_current_time(range_start);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestTimeline;

    #[test]
    fn test_anchor_at_range_start() {
        let timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0]);
        assert_eq!(resolve_anchor(&timeline, 10.0), Ok(10.0));
    }

    #[test]
    fn test_anchor_falls_back_to_previous_key() {
        let timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0]);
        assert_eq!(resolve_anchor(&timeline, 14.0), Ok(10.0));
    }

    #[test]
    fn test_anchor_on_empty_track() {
        let timeline = TestTimeline::with_keys(&[]);
        assert_eq!(resolve_anchor(&timeline, 5.0), Err(RetimeError::NoKeyframes));
    }

    #[test]
    fn test_anchor_before_first_key() {
        // Nothing at or before range_start reports the same way as an
        // empty track.
        let timeline = TestTimeline::with_keys(&[10.0, 20.0]);
        assert_eq!(resolve_anchor(&timeline, 5.0), Err(RetimeError::NoKeyframes));
    }

    #[test]
    fn test_retime_incremental_scenario() {
        let mut timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0]);
        timeline.select(0.0, 10.0);
        retime(&mut timeline, &RetimeRequest::incremental(5.0)).unwrap();
        assert_eq!(timeline.keys(), &[0.0, 15.0, 25.0]);
    }

    #[test]
    fn test_retime_absolute_scenario() {
        let mut timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0, 30.0]);
        timeline.select(0.0, 20.0);
        retime(&mut timeline, &RetimeRequest::absolute(1.0)).unwrap();
        assert_eq!(timeline.keys(), &[0.0, 1.0, 2.0, 12.0]);
    }

    #[test]
    fn test_retime_keeps_strict_ordering() {
        let mut timeline = TestTimeline::with_keys(&[0.0, 3.0, 7.0, 12.0, 30.0]);
        timeline.select(2.0, 20.0);
        retime(&mut timeline, &RetimeRequest::incremental(-10.0)).unwrap();
        let keys = timeline.keys();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_retime_single_key_is_noop() {
        let mut timeline = TestTimeline::with_keys(&[5.0]);
        timeline.select(5.0, 5.0);
        retime(&mut timeline, &RetimeRequest::absolute(3.0)).unwrap();
        assert_eq!(timeline.keys(), &[5.0]);
        assert!(timeline.moves().is_empty());
    }

    #[test]
    fn test_retime_empty_track_reports_no_keyframes() {
        let mut timeline = TestTimeline::with_keys(&[]);
        timeline.select(0.0, 10.0);
        let err = retime(&mut timeline, &RetimeRequest::absolute(1.0)).unwrap_err();
        assert_eq!(err, RetimeError::NoKeyframes);
        assert!(timeline.moves().is_empty());
    }

    #[test]
    fn test_playhead_advances_to_next_key() {
        let mut timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0]);
        timeline.select(0.0, 10.0);
        let request = RetimeRequest::incremental(5.0).with_advance_to_next(true);
        retime(&mut timeline, &request).unwrap();
        // Anchor 0 stays, the key after it now sits at 15.
        assert_eq!(timeline.current_time(), Some(15.0));
    }

    #[test]
    fn test_playhead_returns_to_anchor() {
        let mut timeline = TestTimeline::with_keys(&[0.0, 10.0, 20.0]);
        timeline.select(8.0, 12.0);
        retime(&mut timeline, &RetimeRequest::incremental(2.0)).unwrap();
        assert_eq!(timeline.current_time(), Some(0.0));
    }

    #[test]
    fn test_playhead_stays_on_range_start_before_first_key() {
        // Selection entirely before the first key, but a key exists at
        // range_start so the anchor resolves.
        let mut timeline = TestTimeline::with_keys(&[10.0, 20.0]);
        timeline.select(10.0, 10.0);
        retime(&mut timeline, &RetimeRequest::incremental(1.0)).unwrap();
        assert_eq!(timeline.current_time(), Some(10.0));
    }
}
