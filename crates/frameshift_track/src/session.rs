// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editing session: runs retimes as single undoable chunks.

use crate::history::{History, HistoryError, Snapshot, UndoChunk};
use crate::stage::Stage;
use frameshift_core::{retime, RetimeError, RetimeRequest};
use thiserror::Error;

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The retime itself failed
    #[error("Retime failed: {0}")]
    Retime(#[from] RetimeError),

    /// Undo/redo bookkeeping failed
    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// A stage paired with undo history.
///
/// Every retime runs inside an implicit chunk: the stage is snapshotted
/// before the engine touches it, and a mid-apply failure restores that
/// snapshot so the stage never ends up partially retimed.
#[derive(Debug)]
pub struct RetimeSession {
    stage: Stage,
    history: History,
}

impl RetimeSession {
    /// Create a session around a stage
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            history: History::new(),
        }
    }

    /// The stage being edited
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The stage, mutably. Edits made here bypass the undo history.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// The session's undo history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run one retime action against the active track.
    ///
    /// On success the action is committed to history as one undoable
    /// chunk. On failure the stage is rolled back to its pre-retime
    /// state and nothing is committed.
    pub fn retime(&mut self, request: &RetimeRequest) -> Result<(), SessionError> {
        let before = Snapshot::capture(&self.stage)?;

        match retime(&mut self.stage, request) {
            Ok(()) => {
                let after = Snapshot::capture(&self.stage)?;
                self.history.commit(UndoChunk {
                    description: describe(request),
                    before,
                    after,
                });
                tracing::debug!(?request, "retime committed");
                Ok(())
            }
            Err(err) => {
                tracing::warn!("retime failed, rolling back stage: {err}");
                self.stage = before.restore()?;
                Err(err.into())
            }
        }
    }

    /// Undo the most recent committed action
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let chunk = self.history.undo()?;
        self.stage = chunk.before.restore()?;
        Ok(())
    }

    /// Redo the most recently undone action
    pub fn redo(&mut self) -> Result<(), SessionError> {
        let chunk = self.history.redo()?;
        self.stage = chunk.after.restore()?;
        Ok(())
    }
}

fn describe(request: &RetimeRequest) -> String {
    format!("Retime keys ({:?} {:+})", request.mode, request.amount)
}
