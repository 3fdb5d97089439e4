//! dfa-scan: a predicate-driven DFA engine for longest-match scanning
//!
//! An automaton is declared once (states, alphabet, start state, final
//! states) and given per-state transition rules. It is then fed symbols one
//! at a time or in chunks; when no rule matches, the caller can retract to
//! the most recent accepting configuration to recover the longest valid
//! match and continue scanning from there.
//!
//! # Core Concepts
//!
//! - **Predicates**: Pure symbol tests (exact, set, range, custom, pattern)
//! - **Rules**: Tried most-recently-registered first; the first match wins
//! - **Configuration**: Current state, its class, and a global symbol counter
//! - **Checkpoint**: The last accepting configuration, consumed by `retract`
//!
//! # Example
//!
//! ```rust
//! use dfa_scan::{Automaton, RetractResult, RunResult, StateClass};
//!
//! let mut automaton = Automaton::new(vec![1, 2, 3, 4, 5], b"ab".to_vec(), 1, vec![3, 5]).unwrap();
//! automaton.add_exact(1, 2, b'a').unwrap();
//! automaton.add_custom(2, 3, |c| c == b'b').unwrap();
//! automaton.add_exact(2, 4, b'a').unwrap();
//! automaton.add_exact(3, 4, b'a').unwrap();
//! automaton.add_exact(4, 5, b'b').unwrap();
//! automaton.add_exact_inverted(5, 4, b'b').unwrap();
//!
//! assert_eq!(automaton.run(b"ababaab", 1), RunResult::Trap);
//! assert_eq!(automaton.retract(), RetractResult::Success);
//!
//! let configuration = automaton.current_configuration();
//! assert_eq!(configuration.state, 5);
//! assert_eq!(configuration.class, StateClass::Final);
//! assert_eq!(configuration.counter, 4);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError, RuleError};
pub use crate::core::{Predicate, StateClass, StateId, Symbol};
pub use engine::{Automaton, Checkpoint, Configuration, RetractResult, RunResult, StepResult};
pub use snapshot::{Snapshot, SnapshotError};
