//! Lifecycle hooks and the listener registry.
//!
//! Every engine operation announces its progress through typed hooks. A
//! hook is a [`HookKind`] tagged with a transition name or a state id, and
//! maps to a derivable event name such as `before-leave-state:1` that
//! listeners subscribe to.
//!
//! Listeners return `Result<(), Veto>` instead of unwinding. A veto raised
//! before the owner is mutated aborts the operation; a veto raised after it
//! is recorded but cannot undo the change.

mod bus;
mod hook;
mod veto;

pub use bus::{EventBus, Listener};
pub use hook::{event_name, Hook, HookKind};
pub use veto::Veto;
