//! Core types shared by the engine and its collaborators.
//!
//! - State identifiers via the `StateId` trait
//! - The `Owner` contract the engine reads and writes through
//! - Immutable history of committed changes

mod history;
mod owner;
mod state;

pub use history::{StateChange, StateHistory};
pub use owner::Owner;
pub use state::StateId;
