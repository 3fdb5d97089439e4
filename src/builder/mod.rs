//! Builder API for automaton construction.
//!
//! This module provides a fluent builder for declaring states and rules in
//! one expression, and the errors raised while doing so.

pub mod error;
pub mod machine;

pub use error::{BuildError, DefinitionError, RuleError};
pub use machine::AutomatonBuilder;
