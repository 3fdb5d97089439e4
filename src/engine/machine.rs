//! Automaton engine that executes transitions over input symbols.

use crate::builder::{BuildError, RuleError};
use crate::core::{describe, Predicate, StateClass, StateId, Symbol};
use crate::engine::definition::Definition;
use crate::engine::outcome::{Checkpoint, Configuration, RetractResult, RunResult, StepResult};
use crate::snapshot::{Snapshot, SnapshotError};
use std::sync::Arc;

/// Mutable execution state, owned by one automaton instance.
#[derive(Clone, Debug)]
struct Execution<S: StateId> {
    current: S,
    counter: usize,
    last_accepting: Option<Checkpoint<S>>,
}

impl<S: StateId> Execution<S> {
    fn at_start(definition: &Definition<S>) -> Self {
        let mut execution = Self {
            current: definition.start.clone(),
            counter: 0,
            last_accepting: None,
        };
        if definition.classifier.is_final(&definition.start) {
            execution.last_accepting = Some(Checkpoint {
                state: definition.start.clone(),
                counter: 0,
            });
        }
        execution
    }
}

/// Deterministic automaton driven one symbol at a time.
///
/// The definition (states, alphabet, rules) is shared by clones of an
/// automaton; the execution configuration is owned by each instance. A clone
/// is therefore an independent scan over the same rule set.
///
/// # Example
///
/// ```rust
/// use dfa_scan::{Automaton, RetractResult, RunResult, StateClass};
///
/// // Accepts one or more digits
/// let mut automaton = Automaton::new(vec![0, 1], b"0123456789".to_vec(), 0, vec![1]).unwrap();
/// automaton.add_range(0, 1, b'0', b'9').unwrap();
/// automaton.add_range(1, 1, b'0', b'9').unwrap();
///
/// assert_eq!(automaton.run(b"42+", 1), RunResult::Trap);
/// let configuration = automaton.current_configuration();
/// assert_eq!(configuration.state, 1);
/// assert_eq!(configuration.class, StateClass::Final);
/// assert_eq!(configuration.counter, 2);
///
/// assert_eq!(automaton.retract(), RetractResult::Success);
/// assert_eq!(automaton.retract(), RetractResult::Fail);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: StateId> {
    definition: Arc<Definition<S>>,
    execution: Execution<S>,
}

impl<S: StateId> Automaton<S> {
    /// Create an automaton in its start state with no rules.
    ///
    /// Fails if `states` is empty or repeats a state, or if `start` or any
    /// of `finals` is not among `states`. Every violation is reported.
    pub fn new(
        states: Vec<S>,
        alphabet: Vec<Symbol>,
        start: S,
        finals: Vec<S>,
    ) -> Result<Self, BuildError> {
        let definition = Definition::new(states, alphabet, start, finals)?;
        let execution = Execution::at_start(&definition);

        log::debug!(
            "built automaton with {} states ({} final), start state {:?}",
            definition.states.len(),
            definition.finals.len(),
            definition.start
        );

        Ok(Self {
            definition: Arc::new(definition),
            execution,
        })
    }

    // Registration

    /// Register a rule from `from` to `to`, tried before every rule already
    /// registered for `from`.
    pub fn add_rule(&mut self, from: S, to: S, predicate: Predicate) -> Result<(), RuleError> {
        let classifier = &self.definition.classifier;
        if !classifier.contains(&from) {
            return Err(RuleError::UndeclaredFrom {
                state: describe(&from),
            });
        }
        if !classifier.contains(&to) {
            return Err(RuleError::UndeclaredTo {
                state: describe(&to),
            });
        }

        log::debug!("registered {:?} rule {:?} -> {:?}", predicate.kind(), from, to);
        Arc::make_mut(&mut self.definition)
            .table
            .add_rule(from, to, predicate);
        Ok(())
    }

    pub fn add_exact(&mut self, from: S, to: S, symbol: Symbol) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::exact(symbol))
    }

    pub fn add_exact_inverted(&mut self, from: S, to: S, symbol: Symbol) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::exact_inverted(symbol))
    }

    pub fn add_set(
        &mut self,
        from: S,
        to: S,
        symbols: impl Into<Vec<Symbol>>,
    ) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::set(symbols))
    }

    pub fn add_set_inverted(
        &mut self,
        from: S,
        to: S,
        symbols: impl Into<Vec<Symbol>>,
    ) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::set_inverted(symbols))
    }

    pub fn add_range(&mut self, from: S, to: S, min: Symbol, max: Symbol) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::range(min, max))
    }

    pub fn add_custom<F>(&mut self, from: S, to: S, check: F) -> Result<(), RuleError>
    where
        F: Fn(Symbol) -> bool + Send + Sync + 'static,
    {
        self.add_rule(from, to, Predicate::custom(check))
    }

    /// Compile `pattern` and register it. An invalid pattern registers nothing.
    pub fn add_pattern(&mut self, from: S, to: S, pattern: &str) -> Result<(), RuleError> {
        self.add_rule(from, to, Predicate::pattern(pattern)?)
    }

    // Execution

    /// Attempt one transition on `symbol`.
    ///
    /// On a match the automaton moves, the counter advances, and landing in a
    /// final state records a checkpoint. Otherwise nothing changes. A counter
    /// already at `usize::MAX` cannot advance, so the step fails.
    pub fn step(&mut self, symbol: Symbol) -> StepResult {
        let Some(next) = self
            .definition
            .table
            .first_match(&self.execution.current, symbol)
            .cloned()
        else {
            log::trace!(
                "trap in state {:?} on symbol {:#04x} at counter {}",
                self.execution.current,
                symbol,
                self.execution.counter
            );
            return StepResult::Fail;
        };

        let execution = &mut self.execution;
        let Some(counter) = execution.counter.checked_add(1) else {
            log::trace!("counter exhausted in state {:?}", execution.current);
            return StepResult::Fail;
        };
        execution.counter = counter;
        if self.definition.classifier.is_final(&next) {
            execution.last_accepting = Some(Checkpoint {
                state: next.clone(),
                counter: execution.counter,
            });
        }
        log::trace!(
            "{:?} -> {:?} on symbol {:#04x}, counter {}",
            execution.current,
            next,
            symbol,
            execution.counter
        );
        execution.current = next;
        StepResult::Success
    }

    /// Step through `input`, whose first symbol has the 1-based
    /// `global_index`, starting at the symbol the automaton expects next.
    pub fn run(&mut self, input: &[Symbol], global_index: usize) -> RunResult {
        let Some(offset) = self.offset_in(input.len(), global_index) else {
            log::trace!(
                "symbol after counter {} is outside buffer of {} starting at {}",
                self.execution.counter,
                input.len(),
                global_index
            );
            return RunResult::WrongIndex;
        };

        for &symbol in &input[offset..] {
            if self.step(symbol) == StepResult::Fail {
                return RunResult::Trap;
            }
        }
        RunResult::MoreInput
    }

    /// Position of the next expected symbol within a buffer.
    fn offset_in(&self, len: usize, global_index: usize) -> Option<usize> {
        if global_index == 0 {
            return None;
        }
        let offset = self
            .execution
            .counter
            .checked_add(1)?
            .checked_sub(global_index)?;
        (offset < len).then_some(offset)
    }

    /// Discard one symbol: advance the counter without moving. The counter
    /// saturates at `usize::MAX`.
    pub fn skip(&mut self) {
        self.execution.counter = self.execution.counter.saturating_add(1);
    }

    /// Rewind to the last accepting configuration and consume the checkpoint.
    pub fn retract(&mut self) -> RetractResult {
        let Some(checkpoint) = self.execution.last_accepting.take() else {
            return RetractResult::Fail;
        };

        log::debug!(
            "retracted from {:?} at counter {} to {:?} at counter {}",
            self.execution.current,
            self.execution.counter,
            checkpoint.state,
            checkpoint.counter
        );
        self.execution.current = checkpoint.state;
        self.execution.counter = checkpoint.counter;
        RetractResult::Success
    }

    /// Return to the start state and drop the checkpoint, keeping the counter.
    pub fn reset_state(&mut self) {
        log::debug!("reset to start state at counter {}", self.execution.counter);
        self.execution.current = self.definition.start.clone();
        self.execution.last_accepting = None;
    }

    /// Return to the start state, drop the checkpoint, and zero the counter.
    pub fn reset(&mut self) {
        self.reset_state();
        self.execution.counter = 0;
    }

    // Introspection

    pub fn current_configuration(&self) -> Configuration<S> {
        Configuration {
            state: self.execution.current.clone(),
            class: self.current_class(),
            counter: self.execution.counter,
        }
    }

    /// Check if the automaton is currently in a final state
    pub fn is_final(&self) -> bool {
        self.current_class().is_final()
    }

    pub fn last_accepting(&self) -> Option<&Checkpoint<S>> {
        self.execution.last_accepting.as_ref()
    }

    pub fn classify(&self, state: &S) -> Option<StateClass> {
        self.definition.classifier.classify(state)
    }

    pub fn states(&self) -> &[S] {
        &self.definition.states
    }

    pub fn final_states(&self) -> &[S] {
        &self.definition.finals
    }

    pub fn start_state(&self) -> &S {
        &self.definition.start
    }

    pub fn alphabet(&self) -> &[Symbol] {
        &self.definition.alphabet
    }

    /// Whether `symbol` was declared in the alphabet. The engine itself
    /// accepts any symbol.
    pub fn in_alphabet(&self, symbol: Symbol) -> bool {
        self.definition.alphabet.contains(&symbol)
    }

    pub fn rule_count(&self) -> usize {
        self.definition.table.rule_count()
    }

    fn current_class(&self) -> StateClass {
        // Registration only accepts declared states, so the current state
        // always has a class.
        self.definition
            .classifier
            .classify(&self.execution.current)
            .unwrap_or(StateClass::NonFinal)
    }

    // Persistence

    /// Capture the execution configuration for later [`Automaton::restore`].
    pub fn snapshot(&self) -> Snapshot<S> {
        Snapshot::new(
            self.current_configuration(),
            self.execution.last_accepting.clone(),
        )
    }

    /// Replace the execution configuration with one captured earlier.
    ///
    /// The snapshot must name declared states with matching classes. On
    /// error the automaton is unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot<S>) -> Result<(), SnapshotError> {
        snapshot.validate(&self.definition.classifier)?;

        log::debug!(
            "restored snapshot {} at state {:?}, counter {}",
            snapshot.id,
            snapshot.configuration.state,
            snapshot.configuration.counter
        );
        self.execution = Execution {
            current: snapshot.configuration.state.clone(),
            counter: snapshot.configuration.counter,
            last_accepting: snapshot.last_accepting.clone(),
        };
        Ok(())
    }
}
