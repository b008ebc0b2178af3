//! Strictstate: a strict finite-state-machine behavior engine
//!
//! Strictstate attaches declarative state and transition rules to an owning
//! entity. Only declared transitions leaving the owner's current state are
//! legal, and every change runs through a fixed hook protocol that lets
//! domain listeners veto it or react to it.
//!
//! # Core Concepts
//!
//! - **Owner**: holds the state value and persists it, via the `Owner` trait
//! - **Hooks**: typed lifecycle events listeners subscribe to by name
//! - **Vetoes**: listener rejections returned as values, never unwound
//! - **Error log**: per-call record of why the last operation failed
//! - **Dimensions**: nested key paths resolving to a transition name
//!
//! # Example
//!
//! ```rust
//! use strictstate::prelude::*;
//!
//! struct Account {
//!     status: Option<i32>,
//!     balance: i64,
//!     bus: EventBus<Account, i32>,
//! }
//!
//! impl Owner<i32> for Account {
//!     fn state(&self) -> Option<i32> {
//!         self.status
//!     }
//!
//!     fn set_state(&mut self, state: i32) {
//!         self.status = Some(state);
//!     }
//!
//!     fn persist(&mut self) -> bool {
//!         true
//!     }
//!
//!     fn dispatch(&mut self, hook: &Hook<i32>) -> Result<(), Veto> {
//!         let this: &Self = self;
//!         this.bus.dispatch(this, hook)
//!     }
//! }
//!
//! let mut fsm = FsmBuilder::new()
//!     .attribute("status")
//!     .default_state(1)
//!     .state(1, "active")
//!     .state(2, "closed")
//!     .transition("close", 1, 2)
//!     .build()
//!     .unwrap();
//!
//! let mut account = Account { status: None, balance: 10, bus: EventBus::new() };
//! account.bus.on(Hook::ValidateTransition("close".to_string()), |account: &Account, _hook: &Hook<i32>| {
//!     if account.balance != 0 {
//!         return Err(Veto::new("balance must be zero"));
//!     }
//!     Ok(())
//! });
//!
//! assert!(!fsm.transition(&mut account, "close"));
//! assert_eq!(fsm.last_error(), "balance must be zero");
//!
//! account.balance = 0;
//! assert!(fsm.transition(&mut account, "close"));
//! assert!(fsm.is_state(&account, &2));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod hooks;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder};
pub use crate::config::{ConfigError, FsmConfig};
pub use crate::core::{Owner, StateId};
pub use crate::hooks::{EventBus, Hook, HookKind, Veto};
pub use crate::machine::{ErrorRecord, ErrorReporter, StrictState};

pub mod prelude {
    pub use crate::builder::{BuildError, FsmBuilder};
    pub use crate::config::{ConfigError, FsmConfig, TransitionDecl};
    pub use crate::core::{Owner, StateId};
    pub use crate::hooks::{EventBus, Hook, HookKind, Veto};
    pub use crate::machine::{ErrorCode, ErrorRecord, ErrorReporter, StrictState};
}
