//! State identifier trait.
//!
//! The engine never owns the state value; it only compares, hashes and
//! names identifiers handed over by the owner. Anything that satisfies
//! the bounds below can be a state id: integers, strings, or enums
//! generated with [`state_enum!`](crate::state_enum).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state identifiers.
///
/// `Display` feeds hook event names (`before-enter-state:<state>`), so it
/// must be stable for a given value.
///
/// # Example
///
/// ```rust
/// use strictstate::core::StateId;
///
/// fn event_suffix<S: StateId>(state: &S) -> String {
///     state.key()
/// }
///
/// assert_eq!(event_suffix(&2), "2");
/// assert_eq!(event_suffix(&"inactive".to_string()), "inactive");
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Display + Serialize + DeserializeOwned + Send + Sync
{
    /// String form used when deriving event names and log fields.
    fn key(&self) -> String {
        self.to_string()
    }
}

impl<T> StateId for T where
    T: Clone + Eq + Hash + Debug + Display + Serialize + DeserializeOwned + Send + Sync
{
}
