//! Classification of declared states.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role a declared state plays in the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateClass {
    /// The start state, when it is not also accepting
    Start,
    /// Neither start nor accepting
    NonFinal,
    /// An accepting state
    Final,
}

impl StateClass {
    pub fn is_final(self) -> bool {
        matches!(self, StateClass::Final)
    }
}

/// Immutable state → class lookup, computed once at construction.
///
/// A state listed as final is `Final` even when it is also the start state,
/// so an automaton that accepts the empty input records a checkpoint before
/// consuming anything.
#[derive(Clone, Debug)]
pub struct Classifier<S: StateId> {
    classes: HashMap<S, StateClass>,
}

impl<S: StateId> Classifier<S> {
    /// Classify every declared state.
    ///
    /// Callers validate that `start` and every entry of `finals` appear in
    /// `states` before building a classifier.
    pub fn new(states: &[S], start: &S, finals: &[S]) -> Self {
        let mut classes: HashMap<S, StateClass> = states
            .iter()
            .map(|state| (state.clone(), StateClass::NonFinal))
            .collect();

        classes.insert(start.clone(), StateClass::Start);
        for state in finals {
            classes.insert(state.clone(), StateClass::Final);
        }

        Self { classes }
    }

    pub fn classify(&self, state: &S) -> Option<StateClass> {
        self.classes.get(state).copied()
    }

    pub fn is_final(&self, state: &S) -> bool {
        self.classify(state).is_some_and(StateClass::is_final)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.classes.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
