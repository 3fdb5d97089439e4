//! Immutable part of an automaton: declared states, alphabet and rules.

use crate::builder::{BuildError, DefinitionError};
use crate::core::{describe, Classifier, StateId, Symbol, TransitionTable};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Declared states, alphabet, classifier and transition table.
///
/// Shared between automaton clones; only rule registration mutates it.
#[derive(Clone, Debug)]
pub(crate) struct Definition<S: StateId> {
    pub(crate) states: Vec<S>,
    pub(crate) alphabet: Vec<Symbol>,
    pub(crate) start: S,
    pub(crate) finals: Vec<S>,
    pub(crate) classifier: Classifier<S>,
    pub(crate) table: TransitionTable<S>,
}

impl<S: StateId> Definition<S> {
    pub(crate) fn new(
        states: Vec<S>,
        alphabet: Vec<Symbol>,
        start: S,
        finals: Vec<S>,
    ) -> Result<Self, BuildError> {
        validate(&states, &start, &finals)?;

        let classifier = Classifier::new(&states, &start, &finals);
        Ok(Self {
            states,
            alphabet,
            start,
            finals,
            classifier,
            table: TransitionTable::new(),
        })
    }
}

/// Check a definition, accumulating every violation instead of stopping at
/// the first one.
fn validate<S: StateId>(states: &[S], start: &S, finals: &[S]) -> Result<(), BuildError> {
    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

    if states.is_empty() {
        checks.push(Validation::fail(DefinitionError::NoStates));
    }

    let mut declared: HashSet<&S> = HashSet::with_capacity(states.len());
    let mut reported: HashSet<&S> = HashSet::new();
    for state in states {
        if !declared.insert(state) && reported.insert(state) {
            checks.push(Validation::fail(DefinitionError::DuplicateState {
                state: describe(state),
            }));
        }
    }

    if !declared.contains(start) {
        checks.push(Validation::fail(DefinitionError::UndeclaredStart {
            state: describe(start),
        }));
    }

    for state in finals {
        if !declared.contains(state) {
            checks.push(Validation::fail(DefinitionError::UndeclaredFinal {
                state: describe(state),
            }));
        }
    }

    if checks.is_empty() {
        return Ok(());
    }

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::InvalidDefinition(
            errors.iter().cloned().collect(),
        )),
    }
}
