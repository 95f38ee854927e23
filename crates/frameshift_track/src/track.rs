// SPDX-License-Identifier: MIT OR Apache-2.0
//! A single animated property's keyframe store.

use crate::keyframe::{Keyframe, KeyframeId, KeyframeValue};
use frameshift_core::{same_time, RetimeError, Time};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    /// Create a new random track ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyframes of one animated property, kept sorted with unique times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: TrackId,
    /// Track name (property path, e.g. "camera.tx")
    pub name: String,
    /// Keyframes, sorted by time
    keyframes: Vec<Keyframe>,
    /// Locked tracks refuse all keyframe edits
    pub locked: bool,
}

impl Track {
    /// Create a new empty track
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(),
            name: name.into(),
            keyframes: Vec::new(),
            locked: false,
        }
    }

    /// Insert a keyframe at `time`, or replace the value of an existing
    /// key there. Returns the ID of the key now occupying `time`.
    pub fn set_key(&mut self, time: Time, value: KeyframeValue) -> KeyframeId {
        if let Some(existing) = self.keyframes.iter_mut().find(|k| same_time(k.time, time)) {
            existing.value = value;
            return existing.id;
        }
        let keyframe = Keyframe::new(time, value);
        let id = keyframe.id;
        self.keyframes.push(keyframe);
        self.sort_keyframes();
        id
    }

    /// Remove the keyframe at `time`, returning it if one was there
    pub fn remove_key(&mut self, time: Time) -> Option<Keyframe> {
        let index = self.keyframes.iter().position(|k| same_time(k.time, time))?;
        Some(self.keyframes.remove(index))
    }

    fn sort_keyframes(&mut self) {
        self.keyframes
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap());
    }

    /// Time of the first keyframe
    pub fn first_key(&self) -> Option<Time> {
        self.keyframes.first().map(|k| k.time)
    }

    /// Time of the last keyframe
    pub fn last_key(&self) -> Option<Time> {
        self.keyframes.last().map(|k| k.time)
    }

    /// Time of the nearest keyframe strictly after `t`
    pub fn next_key(&self, t: Time) -> Option<Time> {
        self.keyframes
            .iter()
            .map(|k| k.time)
            .find(|&kt| kt > t && !same_time(kt, t))
    }

    /// Time of the nearest keyframe strictly before `t`
    pub fn previous_key(&self, t: Time) -> Option<Time> {
        self.keyframes
            .iter()
            .map(|k| k.time)
            .rev()
            .find(|&kt| kt < t && !same_time(kt, t))
    }

    /// The keyframe at `t`, if one exists there
    pub fn key_at(&self, t: Time) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| same_time(k.time, t))
    }

    /// Relocate the keyframe at `from` to `to`.
    ///
    /// Rejected when the track is locked, no key sits at `from`, or
    /// another key already occupies `to`.
    pub fn move_key(&mut self, from: Time, to: Time) -> Result<(), RetimeError> {
        if self.locked {
            tracing::warn!(track = %self.name, "move rejected on locked track");
            return Err(RetimeError::MoveRejected { from, to });
        }
        if self
            .keyframes
            .iter()
            .any(|k| same_time(k.time, to) && !same_time(k.time, from))
        {
            return Err(RetimeError::MoveRejected { from, to });
        }
        let Some(keyframe) = self.keyframes.iter_mut().find(|k| same_time(k.time, from)) else {
            return Err(RetimeError::MoveRejected { from, to });
        };
        keyframe.time = to;
        self.sort_keyframes();
        Ok(())
    }

    /// All keyframes, in time order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Keyframe times, in order (handy for assertions and diffing)
    pub fn key_times(&self) -> Vec<Time> {
        self.keyframes.iter().map(|k| k.time).collect()
    }

    /// Number of keyframes on the track
    pub fn key_count(&self) -> usize {
        self.keyframes.len()
    }
}
