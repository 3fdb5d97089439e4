//! Snapshot error types.

use crate::core::StateClass;
use thiserror::Error;

/// Errors from encoding, decoding or restoring a [`Snapshot`](super::Snapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary snapshot encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The recorded state is not one of the automaton's states, typically
    /// because the snapshot came from a different definition.
    #[error("Snapshot state {state} is not declared")]
    UndeclaredState { state: String },

    #[error("Snapshot records state {state} as {recorded:?}, but it is {declared:?}")]
    ClassMismatch {
        state: String,
        declared: StateClass,
        recorded: StateClass,
    },

    #[error("Snapshot checkpoint state {state} is not final")]
    CheckpointNotFinal { state: String },

    /// Retracting would move the counter forward.
    #[error("Snapshot checkpoint counter {checkpoint} is ahead of counter {counter}")]
    CheckpointAhead { checkpoint: usize, counter: usize },
}
