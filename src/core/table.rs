//! Per-state transition rules.

use super::predicate::Predicate;
use super::state::{StateId, Symbol};
use std::collections::HashMap;

/// A single outgoing rule: take `to` when `predicate` accepts the symbol.
#[derive(Clone, Debug)]
pub struct Rule<S: StateId> {
    pub to: S,
    pub predicate: Predicate,
}

impl<S: StateId> Rule<S> {
    pub fn matches(&self, symbol: Symbol) -> bool {
        self.predicate.matches(symbol)
    }
}

/// Maps each from-state to its ordered rules.
///
/// Rules are stored in registration order and scanned newest first, so the
/// most recently registered matching rule wins.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: StateId> {
    rules: HashMap<S, Vec<Rule<S>>>,
}

impl<S: StateId> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> TransitionTable<S> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule ahead of every rule already registered for `from`.
    pub fn add_rule(&mut self, from: S, to: S, predicate: Predicate) {
        self.rules
            .entry(from)
            .or_default()
            .push(Rule { to, predicate });
    }

    /// Destination of the first rule from `from` that accepts `symbol`.
    pub fn first_match(&self, from: &S, symbol: Symbol) -> Option<&S> {
        self.rules_from(from)
            .find(|rule| rule.matches(symbol))
            .map(|rule| &rule.to)
    }

    /// Rules leaving `from`, in the order they are tried.
    pub fn rules_from<'a>(&'a self, from: &S) -> impl Iterator<Item = &'a Rule<S>> + 'a {
        self.rules
            .get(from)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
            .iter()
            .rev()
    }

    /// Total number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}
