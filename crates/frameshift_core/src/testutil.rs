// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory timeline fixture for engine tests.

use crate::timeline::{same_time, RetimeError, Time, Timeline};

/// Sorted-key timeline that records moves and rejects collisions, so
/// tests can assert both final state and write order.
pub struct TestTimeline {
    keys: Vec<Time>,
    selection: (Time, Time),
    current: Option<Time>,
    moves: Vec<(Time, Time)>,
    reject_all: bool,
}

impl TestTimeline {
    pub fn with_keys(keys: &[Time]) -> Self {
        Self {
            keys: keys.to_vec(),
            selection: (0.0, 0.0),
            current: None,
            moves: Vec::new(),
            reject_all: false,
        }
    }

    pub fn select(&mut self, start: Time, end: Time) {
        self.selection = (start, end);
    }

    /// Make every subsequent move fail, as a locked host track would.
    pub fn reject_moves(&mut self) {
        self.reject_all = true;
    }

    pub fn keys(&self) -> &[Time] {
        &self.keys
    }

    pub fn moves(&self) -> &[(Time, Time)] {
        &self.moves
    }

    pub fn current_time(&self) -> Option<Time> {
        self.current
    }
}

impl Timeline for TestTimeline {
    fn first_key(&self) -> Option<Time> {
        self.keys.first().copied()
    }

    fn last_key(&self) -> Option<Time> {
        self.keys.last().copied()
    }

    fn next_key(&self, t: Time) -> Option<Time> {
        self.keys
            .iter()
            .copied()
            .find(|&k| k > t && !same_time(k, t))
    }

    fn previous_key(&self, t: Time) -> Option<Time> {
        self.keys
            .iter()
            .copied()
            .rev()
            .find(|&k| k < t && !same_time(k, t))
    }

    fn key_at(&self, t: Time) -> Option<Time> {
        self.keys.iter().copied().find(|&k| same_time(k, t))
    }

    fn move_key(&mut self, from: Time, to: Time) -> Result<(), RetimeError> {
        let rejected = self.reject_all
            || self.keys.iter().any(|&k| same_time(k, to))
            || !self.keys.iter().any(|&k| same_time(k, from));
        if rejected {
            return Err(RetimeError::MoveRejected { from, to });
        }

        let index = self
            .keys
            .iter()
            .position(|&k| same_time(k, from))
            .ok_or(RetimeError::MoveRejected { from, to })?;
        self.keys[index] = to;
        self.keys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        self.moves.push((from, to));
        Ok(())
    }

    fn selected_range(&self) -> (Time, Time) {
        self.selection
    }

    fn set_current_time(&mut self, t: Time) {
        self.current = Some(t);
    }
}
