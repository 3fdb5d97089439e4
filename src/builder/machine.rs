//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Predicate, StateId, Symbol};
use crate::engine::Automaton;

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```rust
/// use dfa_scan::builder::AutomatonBuilder;
/// use dfa_scan::core::Predicate;
/// use dfa_scan::{RunResult, StateClass};
///
/// let mut automaton = AutomatonBuilder::new()
///     .states(["start", "word"].map(String::from))
///     .alphabet(b"abcdefghijklmnopqrstuvwxyz".to_vec())
///     .start("start".to_string())
///     .finals(["word".to_string()])
///     .rule("start".to_string(), "word".to_string(), Predicate::range(b'a', b'z'))
///     .rule("word".to_string(), "word".to_string(), Predicate::range(b'a', b'z'))
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.run(b"abc", 1), RunResult::MoreInput);
/// assert_eq!(automaton.current_configuration().class, StateClass::Final);
/// ```
pub struct AutomatonBuilder<S: StateId> {
    states: Vec<S>,
    alphabet: Vec<Symbol>,
    start: Option<S>,
    finals: Vec<S>,
    rules: Vec<(S, S, Predicate)>,
}

impl<S: StateId> AutomatonBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            start: None,
            finals: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Declare states, appending to any declared earlier.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare alphabet symbols, appending to any declared earlier.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark states as final, appending to any marked earlier.
    pub fn finals(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.finals.extend(states);
        self
    }

    /// Queue a rule. Rules are registered in call order, so a later rule
    /// takes priority over an earlier one from the same state.
    pub fn rule(mut self, from: S, to: S, predicate: Predicate) -> Self {
        self.rules.push((from, to, predicate));
        self
    }

    /// Build the automaton.
    /// Returns an error if the definition is invalid or a rule is rejected.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStart)?;

        let mut automaton = Automaton::new(self.states, self.alphabet, start, self.finals)?;
        for (from, to, predicate) in self.rules {
            automaton.add_rule(from, to, predicate)?;
        }

        Ok(automaton)
    }
}

impl<S: StateId> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DefinitionError, RuleError};
    use crate::core::StateClass;
    use crate::engine::StepResult;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum LexState {
        Start,
        Ident,
        Number,
    }

    #[test]
    fn builder_requires_start() {
        let result = AutomatonBuilder::<u32>::new().states([1, 2]).build();

        assert!(matches!(result, Err(BuildError::MissingStart)));
    }

    #[test]
    fn builder_reports_definition_errors() {
        let result = AutomatonBuilder::new()
            .states([1, 2])
            .start(1)
            .finals([3])
            .build();

        match result {
            Err(BuildError::InvalidDefinition(errors)) => {
                assert_eq!(
                    errors,
                    vec![DefinitionError::UndeclaredFinal {
                        state: "3".to_string()
                    }]
                );
            }
            other => panic!("Expected InvalidDefinition, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn builder_reports_rule_errors() {
        let result = AutomatonBuilder::new()
            .states([1, 2])
            .start(1)
            .rule(1, 7, Predicate::exact(b'a'))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Rule(RuleError::UndeclaredTo { .. }))
        ));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let mut automaton = AutomatonBuilder::new()
            .states([LexState::Start, LexState::Ident, LexState::Number])
            .alphabet(b'a'..=b'z')
            .alphabet(b'0'..=b'9')
            .start(LexState::Start)
            .finals([LexState::Ident, LexState::Number])
            .rule(LexState::Start, LexState::Ident, Predicate::range(b'a', b'z'))
            .rule(LexState::Start, LexState::Number, Predicate::range(b'0', b'9'))
            .rule(
                LexState::Ident,
                LexState::Ident,
                Predicate::custom(|c| c.is_ascii_alphanumeric()),
            )
            .build()
            .unwrap();

        assert_eq!(automaton.alphabet().len(), 36);
        assert_eq!(automaton.rule_count(), 3);

        assert_eq!(automaton.step(b'x'), StepResult::Success);
        assert_eq!(automaton.step(b'1'), StepResult::Success);
        let configuration = automaton.current_configuration();
        assert_eq!(configuration.state, LexState::Ident);
        assert_eq!(configuration.class, StateClass::Final);
    }

    #[test]
    fn rules_keep_call_order_priority() {
        let mut automaton = AutomatonBuilder::new()
            .states([1, 2, 3])
            .start(1)
            .rule(1, 2, Predicate::exact_inverted(b' '))
            .rule(1, 3, Predicate::exact(b'#'))
            .build()
            .unwrap();

        assert_eq!(automaton.step(b'#'), StepResult::Success);
        assert_eq!(automaton.current_configuration().state, 3);
    }
}
