// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stage: tracks plus playhead and selection state.

use crate::track::{Track, TrackId};
use frameshift_core::{RetimeError, Time, Timeline};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A set of animation tracks with the editing state a retime needs:
/// which track is active, where the playhead is, and what time window
/// the user has selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name
    pub name: String,
    /// Tracks, in creation order
    tracks: IndexMap<TrackId, Track>,
    /// Track that edits and retimes apply to
    active: Option<TrackId>,
    /// Playhead position
    current_time: Time,
    /// Selected time window `(start, end)`
    selection: (Time, Time),
}

impl Stage {
    /// Create a new empty stage
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: IndexMap::new(),
            active: None,
            current_time: 0.0,
            selection: (0.0, 0.0),
        }
    }

    /// Add a track. The first track added becomes the active one.
    pub fn add_track(&mut self, track: Track) -> TrackId {
        let id = track.id;
        self.tracks.insert(id, track);
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Remove a track
    pub fn remove_track(&mut self, track_id: TrackId) -> Option<Track> {
        let removed = self.tracks.shift_remove(&track_id);
        if self.active == Some(track_id) {
            self.active = self.tracks.keys().next().copied();
        }
        removed
    }

    /// Make `track_id` the target of edits and retimes
    pub fn set_active(&mut self, track_id: TrackId) {
        if self.tracks.contains_key(&track_id) {
            self.active = Some(track_id);
        }
    }

    /// ID of the active track
    pub fn active_track_id(&self) -> Option<TrackId> {
        self.active
    }

    /// The active track
    pub fn active_track(&self) -> Option<&Track> {
        self.active.and_then(|id| self.tracks.get(&id))
    }

    /// The active track, mutably
    pub fn active_track_mut(&mut self) -> Option<&mut Track> {
        self.active.and_then(|id| self.tracks.get_mut(&id))
    }

    /// Get a track
    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.get(&track_id)
    }

    /// Get a mutable track
    pub fn track_mut(&mut self, track_id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(&track_id)
    }

    /// All tracks, in creation order
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Select a time window. A reversed window is normalized.
    pub fn select_range(&mut self, start: Time, end: Time) {
        self.selection = if end < start { (end, start) } else { (start, end) };
    }

    /// Playhead position
    pub fn current_time(&self) -> Time {
        self.current_time
    }
}

impl Timeline for Stage {
    fn first_key(&self) -> Option<Time> {
        self.active_track().and_then(Track::first_key)
    }

    fn last_key(&self) -> Option<Time> {
        self.active_track().and_then(Track::last_key)
    }

    fn next_key(&self, t: Time) -> Option<Time> {
        self.active_track().and_then(|track| track.next_key(t))
    }

    fn previous_key(&self, t: Time) -> Option<Time> {
        self.active_track().and_then(|track| track.previous_key(t))
    }

    fn key_at(&self, t: Time) -> Option<Time> {
        self.active_track()
            .and_then(|track| track.key_at(t))
            .map(|k| k.time)
    }

    fn move_key(&mut self, from: Time, to: Time) -> Result<(), RetimeError> {
        let Some(track) = self.active_track_mut() else {
            return Err(RetimeError::NoKeyframes);
        };
        track.move_key(from, to)
    }

    fn selected_range(&self) -> (Time, Time) {
        self.selection
    }

    fn set_current_time(&mut self, t: Time) {
        self.current_time = t;
    }
}
