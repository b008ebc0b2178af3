//! The owner contract consumed by the engine.

use super::state::StateId;
use crate::hooks::{Hook, Veto};

/// An entity that holds a state attribute driven by a [`StrictState`].
///
/// The owner exclusively owns its state value. The engine reads and writes
/// it through this trait, asks the owner to persist after every write, and
/// routes lifecycle hooks through [`Owner::dispatch`].
///
/// # Example
///
/// ```rust
/// use strictstate::core::Owner;
///
/// struct Account {
///     status: Option<i32>,
///     saves: usize,
/// }
///
/// impl Owner<i32> for Account {
///     fn state(&self) -> Option<i32> {
///         self.status
///     }
///
///     fn set_state(&mut self, state: i32) {
///         self.status = Some(state);
///     }
///
///     fn persist(&mut self) -> bool {
///         self.saves += 1;
///         true
///     }
/// }
/// ```
///
/// [`StrictState`]: crate::machine::StrictState
pub trait Owner<S: StateId> {
    /// Current value of the state attribute, `None` while unset.
    fn state(&self) -> Option<S>;

    /// Overwrite the state attribute in memory.
    fn set_state(&mut self, state: S);

    /// Durably save the owner. Returns `true` on success.
    fn persist(&mut self) -> bool;

    /// Deliver a lifecycle hook to the owner's listeners.
    ///
    /// Returning `Err` vetoes the hook. Owners without listeners keep the
    /// default, which accepts everything.
    fn dispatch(&mut self, _hook: &Hook<S>) -> Result<(), Veto> {
        Ok(())
    }
}
