//! State identifiers and input symbols.
//!
//! An automaton names its states with any small comparable value. Integers
//! are the common choice, but enums and strings work just as well.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// One element of the input alphabet.
pub type Symbol = u8;

/// Trait for values that identify automaton states.
///
/// Identifiers are opaque to the engine: it only compares them for equality
/// and uses them as map keys. They must be serializable so that execution
/// snapshots can be persisted.
///
/// # Required Traits
///
/// - `Clone`: Identifiers are copied into rules, configurations and snapshots
/// - `Eq` + `Hash`: Identifiers key the transition table and classifier
/// - `Debug`: Identifiers appear in error messages and logs
/// - `Serialize` + `Deserialize`: Identifiers are persisted in snapshots
///
/// A blanket implementation covers every type meeting these bounds.
///
/// # Example
///
/// ```rust
/// use dfa_scan::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum LexState {
///     Start,
///     Ident,
///     Number,
/// }
///
/// fn assert_state_id<S: StateId>() {}
/// assert_state_id::<LexState>();
/// assert_state_id::<u32>();
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> StateId for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

/// Render a state identifier for error messages and logs.
pub(crate) fn describe<S: StateId>(state: &S) -> String {
    format!("{:?}", state)
}
