//! Result vocabulary of the engine and read-only views of its configuration.
//!
//! None of the outcomes here are errors: a trap or an empty retraction is
//! an expected result the caller acts on.

use crate::core::{StateClass, StateId};
use serde::{Deserialize, Serialize};

/// Result of feeding one symbol to [`crate::Automaton::step`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A rule matched and the automaton moved
    Success,
    /// No rule matched; the configuration is unchanged
    Fail,
}

/// Result of feeding a buffer to [`crate::Automaton::run`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunResult {
    /// Every remaining symbol of the buffer was consumed
    MoreInput,
    /// A symbol matched no rule; stepping stopped in front of it
    Trap,
    /// The next expected symbol is not inside the buffer
    WrongIndex,
}

/// Result of [`crate::Automaton::retract`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetractResult {
    /// Rewound to the last accepting configuration
    Success,
    /// No accepting configuration to rewind to
    Fail,
}

/// Current state, its class, and the number of symbols consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Configuration<S: StateId> {
    pub state: S,
    pub class: StateClass,
    pub counter: usize,
}

/// Most recent accepting configuration, consumed by a successful retraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: StateId> {
    pub state: S,
    pub counter: usize,
}
