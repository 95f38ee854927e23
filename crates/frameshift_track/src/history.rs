// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot-based undo/redo for stage state.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Maximum undo history depth
const MAX_HISTORY: usize = 100;

/// History errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Nothing to undo
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Nothing to redo
    #[error("Nothing to redo")]
    NothingToRedo,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Serialized stage state at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Serialized state
    data: Vec<u8>,
}

impl Snapshot {
    /// Capture a serializable value
    pub fn capture<T: Serialize>(value: &T) -> Result<Self, HistoryError> {
        Ok(Self {
            data: bincode::serialize(value)?,
        })
    }

    /// Restore the captured value
    pub fn restore<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HistoryError> {
        Ok(bincode::deserialize(&self.data)?)
    }

    /// Size of the captured state in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// One undoable unit of work: the state before and after it ran.
///
/// A whole retime commits as a single chunk, so every keyframe move in
/// one user action undoes together.
#[derive(Debug, Clone)]
pub struct UndoChunk {
    /// Human-readable description
    pub description: String,
    /// State before the operation (for undo)
    pub before: Snapshot,
    /// State after the operation (for redo)
    pub after: Snapshot,
}

/// Undo/redo history manager
#[derive(Debug)]
pub struct History {
    undo_stack: VecDeque<UndoChunk>,
    redo_stack: VecDeque<UndoChunk>,
    max_depth: usize,
}

impl History {
    /// Create a new history manager
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY)
    }

    /// Create with custom maximum depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth,
        }
    }

    /// Commit a chunk, clearing any redoable future
    pub fn commit(&mut self, chunk: UndoChunk) {
        self.redo_stack.clear();
        self.undo_stack.push_back(chunk);

        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Undo the last chunk, returning it so the caller can restore state
    pub fn undo(&mut self) -> Result<UndoChunk, HistoryError> {
        let chunk = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push_back(chunk.clone());
        Ok(chunk)
    }

    /// Redo the last undone chunk
    pub fn redo(&mut self) -> Result<UndoChunk, HistoryError> {
        let chunk = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push_back(chunk.clone());
        Ok(chunk)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the next undo chunk
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.description.as_str())
    }

    /// Description of the next redo chunk
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.back().map(|c| c.description.as_str())
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
