//! Snapshot and restore of an automaton's execution configuration.
//!
//! A scan over a long or slowly arriving input can be paused by taking a
//! snapshot, persisting it as JSON or binary, and restoring it into an
//! automaton built from the same definition. Rules are not part of a
//! snapshot: custom predicates are not serializable.

use crate::core::{describe, Classifier, StateId};
use crate::engine::{Checkpoint, Configuration};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of an automaton's execution configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: StateId> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Current state, class and counter
    pub configuration: Configuration<S>,

    /// Last accepting configuration, if one is still valid
    pub last_accepting: Option<Checkpoint<S>>,
}

impl<S: StateId> Snapshot<S> {
    pub fn new(configuration: Configuration<S>, last_accepting: Option<Checkpoint<S>>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            configuration,
            last_accepting,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }

    /// Check that the snapshot fits an automaton with this classifier.
    pub(crate) fn validate(&self, classifier: &Classifier<S>) -> Result<(), SnapshotError> {
        self.check_version()?;

        let configuration = &self.configuration;
        let declared = classifier.classify(&configuration.state).ok_or_else(|| {
            SnapshotError::UndeclaredState {
                state: describe(&configuration.state),
            }
        })?;
        if declared != configuration.class {
            return Err(SnapshotError::ClassMismatch {
                state: describe(&configuration.state),
                declared,
                recorded: configuration.class,
            });
        }

        if let Some(checkpoint) = &self.last_accepting {
            if !classifier.is_final(&checkpoint.state) {
                return Err(SnapshotError::CheckpointNotFinal {
                    state: describe(&checkpoint.state),
                });
            }
            if checkpoint.counter > configuration.counter {
                return Err(SnapshotError::CheckpointAhead {
                    checkpoint: checkpoint.counter,
                    counter: configuration.counter,
                });
            }
        }

        Ok(())
    }
}
