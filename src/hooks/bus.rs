//! Listener registry keyed by derived event name.

use super::hook::{event_name, Hook, HookKind};
use super::veto::Veto;
use crate::core::StateId;
use std::collections::HashMap;

/// Type alias for hook listeners.
///
/// Listeners see the owner read-only and either accept the hook or veto it.
pub type Listener<O, S> = Box<dyn Fn(&O, &Hook<S>) -> Result<(), Veto> + Send + Sync>;

/// Synchronous event bus for lifecycle hooks.
///
/// Owners typically embed one and forward [`Owner::dispatch`] to
/// [`EventBus::dispatch`].
///
/// # Example
///
/// ```rust
/// use strictstate::hooks::{EventBus, Hook, Veto};
///
/// struct Wallet {
///     balance: u64,
/// }
///
/// let mut bus: EventBus<Wallet, i32> = EventBus::new();
/// bus.on(Hook::ValidateTransition("withdraw".to_string()), |wallet: &Wallet, _hook: &Hook<i32>| {
///     if wallet.balance == 0 {
///         return Err(Veto::new("insufficient balance"));
///     }
///     Ok(())
/// });
///
/// let empty = Wallet { balance: 0 };
/// let hook = Hook::ValidateTransition("withdraw".to_string());
/// assert!(bus.dispatch(&empty, &hook).is_err());
/// ```
///
/// [`Owner::dispatch`]: crate::core::Owner::dispatch
pub struct EventBus<O, S: StateId> {
    listeners: HashMap<String, Vec<Listener<O, S>>>,
}

impl<O, S: StateId> EventBus<O, S> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Register a listener for one (kind, parameter) pair.
    pub fn on<F>(&mut self, hook: Hook<S>, listener: F) -> &mut Self
    where
        F: Fn(&O, &Hook<S>) -> Result<(), Veto> + Send + Sync + 'static,
    {
        self.subscribe(hook.event_name(), listener)
    }

    /// Register a listener by kind and raw parameter text.
    pub fn on_event<F>(&mut self, kind: HookKind, parameter: &str, listener: F) -> &mut Self
    where
        F: Fn(&O, &Hook<S>) -> Result<(), Veto> + Send + Sync + 'static,
    {
        self.subscribe(event_name(kind, parameter), listener)
    }

    fn subscribe<F>(&mut self, name: String, listener: F) -> &mut Self
    where
        F: Fn(&O, &Hook<S>) -> Result<(), Veto> + Send + Sync + 'static,
    {
        self.listeners
            .entry(name)
            .or_default()
            .push(Box::new(listener));
        self
    }

    /// Run the listeners of `hook` in registration order.
    ///
    /// Stops at the first veto and returns it.
    pub fn dispatch(&self, owner: &O, hook: &Hook<S>) -> Result<(), Veto> {
        let name = hook.event_name();
        let Some(listeners) = self.listeners.get(&name) else {
            return Ok(());
        };

        tracing::debug!(event = %name, listeners = listeners.len(), "Dispatching hook");
        for listener in listeners {
            listener(owner, hook)?;
        }
        Ok(())
    }

    pub fn listener_count(&self, hook: &Hook<S>) -> usize {
        self.listeners
            .get(&hook.event_name())
            .map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<O, S: StateId> Default for EventBus<O, S> {
    fn default() -> Self {
        Self::new()
    }
}
