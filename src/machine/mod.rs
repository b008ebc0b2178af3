//! The strict state engine and its error log.
//!
//! # Key Concepts
//!
//! - **Guards**: only declared transitions leaving the owner's current
//!   state are legal; the validate hook is the pluggable business rule
//! - **Hook protocol**: before-hooks can veto, after-hooks only notify
//! - **Error log**: cleared by every public call, read back through
//!   `last_error`/`all_errors`
//!
//! # Example
//!
//! ```rust
//! use strictstate::builder::FsmBuilder;
//! use strictstate::core::Owner;
//!
//! struct Account {
//!     status: Option<i32>,
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
//! }
//!
//! let mut fsm = FsmBuilder::new()
//!     .attribute("status")
//!     .default_state(1)
//!     .state(1, "active")
//!     .state(2, "inactive")
//!     .transition("deactivate", 1, 2)
//!     .build()
//!     .unwrap();
//!
//! let mut account = Account { status: Some(1) };
//! assert!(fsm.transition(&mut account, "deactivate"));
//! assert!(!fsm.transition(&mut account, "deactivate"));
//! assert_eq!(
//!     fsm.last_error(),
//!     "Transition deactivate does not apply to current state inactive"
//! );
//! ```

mod engine;
mod errors;

pub use engine::{StrictState, UNKNOWN_LABEL};
pub use errors::{DefaultReporter, ErrorCode, ErrorRecord, ErrorReporter};
