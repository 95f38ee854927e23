// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory keyframe store for the FrameShift retiming engine.
//!
//! Supplies the host side of the engine's `Timeline` contract:
//! - Tracks with sorted, unique-time keyframes
//! - A stage holding tracks, the playhead and the selected range
//! - Snapshot-based undo/redo
//! - A session that runs each retime as one undoable chunk
//!
//! Hosts with their own animation-curve storage only need to implement
//! `frameshift_core::Timeline`; this crate is the reference adapter and
//! what the test suite drives end to end.

pub mod history;
pub mod keyframe;
pub mod session;
pub mod stage;
pub mod track;

pub use history::{History, HistoryError, Snapshot, UndoChunk};
pub use keyframe::{Keyframe, KeyframeId, KeyframeValue};
pub use session::{RetimeSession, SessionError};
pub use stage::Stage;
pub use track::{Track, TrackId};
