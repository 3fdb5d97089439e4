//! The automaton engine.
//!
//! Runs one automaton over one input and keeps enough bookkeeping to
//! support longest-match scanning.
//!
//! # Key Concepts
//!
//! - **Counter**: number of symbols consumed since the last full reset. It
//!   lets a caller feed input in chunks of any size; the engine finds its
//!   own place in each chunk.
//! - **Checkpoint**: the most recent configuration in a final state.
//!   Retraction rewinds to it after a trap and consumes it.
//! - **Outcomes**: traps, exhausted buffers and empty retractions are
//!   ordinary return values, not errors.

mod definition;
mod machine;
mod outcome;

pub use machine::Automaton;
pub use outcome::{Checkpoint, Configuration, RetractResult, RunResult, StepResult};
