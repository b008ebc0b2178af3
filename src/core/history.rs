//! Record of committed state changes.
//!
//! A change is recorded only after the owner persisted it, so the history
//! mirrors what actually reached storage, including changes whose
//! after-hooks were vetoed.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single committed state change.
///
/// `transition` is `None` for direct assignments made with
/// [`StrictState::set_state`](crate::machine::StrictState::set_state).
/// `from` is `None` when the owner had no state before the change.
///
/// # Example
///
/// ```rust
/// use strictstate::core::StateChange;
/// use chrono::Utc;
///
/// let change = StateChange {
///     transition: Some("deactivate".to_string()),
///     from: Some(1),
///     to: 2,
///     timestamp: Utc::now(),
/// };
/// assert!(!change.is_direct());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateChange<S: StateId> {
    /// Name of the transition that caused the change
    pub transition: Option<String>,
    /// The state being left
    pub from: Option<S>,
    /// The state being entered
    pub to: S,
    /// When the change was persisted
    pub timestamp: DateTime<Utc>,
}

impl<S: StateId> StateChange<S> {
    /// True when the change bypassed the transition graph.
    pub fn is_direct(&self) -> bool {
        self.transition.is_none()
    }
}

/// Ordered history of committed state changes.
///
/// `record` returns a new history with the change appended and leaves the
/// original untouched. The engine appends in place with `push`, so a commit
/// costs the same however long the history already is.
///
/// # Example
///
/// ```rust
/// use strictstate::core::{StateChange, StateHistory};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateChange {
///         transition: Some("start".to_string()),
///         from: Some(1),
///         to: 2,
///         timestamp: Utc::now(),
///     })
///     .record(StateChange {
///         transition: Some("finish".to_string()),
///         from: Some(2),
///         to: 3,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: StateId> {
    changes: Vec<StateChange<S>>,
}

impl<S: StateId> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: StateChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Append a change in place.
    pub(crate) fn push(&mut self, change: StateChange<S>) {
        self.changes.push(change);
    }

    /// States traversed: the first known `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(from) = self.changes.first().and_then(|c| c.from.as_ref()) {
            path.push(from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Time between the first and the last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent change.
    pub fn last(&self) -> Option<&StateChange<S>> {
        self.changes.last()
    }

    pub fn transitions(&self) -> &[StateChange<S>] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
