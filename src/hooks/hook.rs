//! Lifecycle hook identities.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven dispatch points of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    ValidateTransition,
    BeforeTransition,
    BeforeLeaveState,
    BeforeEnterState,
    AfterLeaveState,
    AfterEnterState,
    AfterTransition,
}

impl HookKind {
    pub const ALL: [HookKind; 7] = [
        Self::ValidateTransition,
        Self::BeforeTransition,
        Self::BeforeLeaveState,
        Self::BeforeEnterState,
        Self::AfterLeaveState,
        Self::AfterEnterState,
        Self::AfterTransition,
    ];

    /// Prefix of every event name of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::ValidateTransition => "validate-transition",
            Self::BeforeTransition => "before-transition",
            Self::BeforeLeaveState => "before-leave-state",
            Self::BeforeEnterState => "before-enter-state",
            Self::AfterLeaveState => "after-leave-state",
            Self::AfterEnterState => "after-enter-state",
            Self::AfterTransition => "after-transition",
        }
    }

    /// Hooks of the before-phase may veto; after-phase hooks only notify.
    pub fn can_block(&self) -> bool {
        !matches!(
            self,
            Self::AfterLeaveState | Self::AfterEnterState | Self::AfterTransition
        )
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A hook kind tagged with its parameter.
///
/// Transition hooks carry the transition name, state hooks carry the state
/// id. Each (kind, parameter) pair has a distinct event name that listeners
/// subscribe to.
///
/// # Example
///
/// ```rust
/// use strictstate::hooks::Hook;
///
/// let hook: Hook<i32> = Hook::BeforeLeaveState(1);
/// assert_eq!(hook.event_name(), "before-leave-state:1");
///
/// let hook: Hook<i32> = Hook::AfterTransition("deactivate".to_string());
/// assert_eq!(hook.event_name(), "after-transition:deactivate");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hook<S: StateId> {
    ValidateTransition(String),
    BeforeTransition(String),
    BeforeLeaveState(S),
    BeforeEnterState(S),
    AfterLeaveState(S),
    AfterEnterState(S),
    AfterTransition(String),
}

impl<S: StateId> Hook<S> {
    pub fn kind(&self) -> HookKind {
        match self {
            Self::ValidateTransition(_) => HookKind::ValidateTransition,
            Self::BeforeTransition(_) => HookKind::BeforeTransition,
            Self::BeforeLeaveState(_) => HookKind::BeforeLeaveState,
            Self::BeforeEnterState(_) => HookKind::BeforeEnterState,
            Self::AfterLeaveState(_) => HookKind::AfterLeaveState,
            Self::AfterEnterState(_) => HookKind::AfterEnterState,
            Self::AfterTransition(_) => HookKind::AfterTransition,
        }
    }

    /// The hook parameter rendered as text.
    pub fn parameter(&self) -> String {
        match self {
            Self::ValidateTransition(name)
            | Self::BeforeTransition(name)
            | Self::AfterTransition(name) => name.clone(),
            Self::BeforeLeaveState(state)
            | Self::BeforeEnterState(state)
            | Self::AfterLeaveState(state)
            | Self::AfterEnterState(state) => state.key(),
        }
    }

    /// Derived event identifier, `"<kind>:<parameter>"`.
    pub fn event_name(&self) -> String {
        event_name(self.kind(), &self.parameter())
    }
}

impl<S: StateId> fmt::Display for Hook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event_name())
    }
}

/// Build an event name from its parts.
pub fn event_name(kind: HookKind, parameter: &str) -> String {
    format!("{}:{}", kind.prefix(), parameter)
}
