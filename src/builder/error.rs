//! Errors raised while defining an automaton or registering its rules.

use thiserror::Error;

/// A single problem with a state/final-state definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("No states declared. An automaton needs at least one state")]
    NoStates,

    #[error("State {state} is declared more than once")]
    DuplicateState { state: String },

    #[error("Start state {state} is not a declared state")]
    UndeclaredStart { state: String },

    #[error("Final state {state} is not a declared state")]
    UndeclaredFinal { state: String },
}

/// Errors that can occur when registering a transition rule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule source state {state} is not a declared state")]
    UndeclaredFrom { state: String },

    #[error("Rule target state {state} is not a declared state")]
    UndeclaredTo { state: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStart,

    #[error("Invalid automaton definition: {}", summarize(.0))]
    InvalidDefinition(Vec<DefinitionError>),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

fn summarize(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
