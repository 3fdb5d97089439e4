//! Core automaton types.
//!
//! This module contains the pure building blocks of the engine:
//! - State identifiers via the `StateId` trait
//! - Predicates deciding whether a rule applies to a symbol
//! - The immutable state classifier
//! - The per-state transition table
//!
//! Nothing in this module carries execution state; that lives in
//! [`crate::engine`].

mod class;
mod predicate;
mod state;
mod table;

pub use class::{Classifier, StateClass};
pub use predicate::{Predicate, PredicateKind, SymbolFn};
pub use state::{StateId, Symbol};
pub use table::{Rule, TransitionTable};

pub(crate) use state::describe;
