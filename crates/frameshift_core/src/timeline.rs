// SPDX-License-Identifier: MIT OR Apache-2.0
//! Abstract timeline contract the retiming engine runs against.

use thiserror::Error;

/// Keyframe time, in frames.
pub type Time = f64;

/// Two times closer than this are the same keyframe position.
pub const TIME_EPSILON: Time = 1e-3;

/// Errors surfaced by a retime operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RetimeError {
    /// No keyframe could be resolved as the retiming anchor
    #[error("No keyframes found")]
    NoKeyframes,

    /// The host store refused to relocate a keyframe
    #[error("Failed to move keyframe from {from} to {to}")]
    MoveRejected {
        /// Current time of the keyframe that could not be moved
        from: Time,
        /// Target time the move was attempting to reach
        to: Time,
    },
}

/// Read/mutate access to one animated property's keyframes.
///
/// The engine only relocates existing keys in time; it never creates or
/// deletes them, and never touches their values. Implementors must keep
/// keyframe times unique (within [`TIME_EPSILON`]) and sorted.
pub trait Timeline {
    /// Time of the first keyframe on the track
    fn first_key(&self) -> Option<Time>;

    /// Time of the last keyframe on the track
    fn last_key(&self) -> Option<Time>;

    /// Time of the nearest keyframe strictly after `t`
    fn next_key(&self, t: Time) -> Option<Time>;

    /// Time of the nearest keyframe strictly before `t`
    fn previous_key(&self, t: Time) -> Option<Time>;

    /// Exact stored time of the keyframe at `t`, if one exists there
    fn key_at(&self, t: Time) -> Option<Time>;

    /// Relocate the keyframe at `from` to `to`.
    ///
    /// Fails if there is no keyframe at `from`, if `to` collides with
    /// another keyframe, or if the host refuses the edit (locked track).
    fn move_key(&mut self, from: Time, to: Time) -> Result<(), RetimeError>;

    /// The user's currently selected time window `(start, end)`
    fn selected_range(&self) -> (Time, Time);

    /// Move the playhead
    fn set_current_time(&mut self, t: Time);
}

/// Whether two times refer to the same keyframe position.
pub fn same_time(a: Time, b: Time) -> bool {
    (a - b).abs() < TIME_EPSILON
}
