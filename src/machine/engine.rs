//! The strict state engine.

use super::errors::{DefaultReporter, ErrorRecord, ErrorReporter};
use crate::config::{
    check_default_state, check_transitions, resolve_dimension, ConfigError, DimensionNode,
    FsmConfig, TransitionDef,
};
use crate::core::{Owner, StateChange, StateHistory, StateId};
use crate::hooks::Hook;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};

/// Label returned for states that are not declared.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Finite-state-machine behavior attached to an owner.
///
/// The engine holds the immutable configuration and the error log of the
/// most recent operation. The state value itself lives in the owner and is
/// reached through the [`Owner`] trait, so one engine is bound to one owner
/// for the owner's lifetime.
///
/// Every public query or command clears the error log first; read
/// [`last_error`](Self::last_error) right after the call you care about.
pub struct StrictState<S: StateId> {
    attribute: String,
    default_state: S,
    states: HashMap<S, String>,
    transitions: Vec<TransitionDef<S>>,
    index: HashMap<String, usize>,
    dimensions: BTreeMap<String, DimensionNode>,
    last_errors: Vec<ErrorRecord<S>>,
    history: StateHistory<S>,
    reporter: Box<dyn ErrorReporter>,
}

impl<S: StateId> StrictState<S> {
    /// Validate `config` and build the transition index.
    ///
    /// Fails on the first violation, checking the default state before the
    /// transitions and the transitions in declaration order.
    pub fn new(config: FsmConfig<S>) -> Result<Self, ConfigError> {
        check_default_state(&config)?;
        let transitions = check_transitions(&config)?;

        let index = transitions
            .iter()
            .enumerate()
            .map(|(position, def)| (def.name.clone(), position))
            .collect();

        tracing::debug!(
            attribute = %config.attribute,
            states = config.states.len(),
            transitions = transitions.len(),
            "Initialized strict state machine"
        );

        Ok(Self {
            attribute: config.attribute,
            default_state: config.default_state,
            states: config.states,
            transitions,
            index,
            dimensions: config.dimensions,
            last_errors: Vec::new(),
            history: StateHistory::new(),
            reporter: Box::new(DefaultReporter),
        })
    }

    /// Replace the message formatter.
    pub fn with_reporter<R>(mut self, reporter: R) -> Self
    where
        R: ErrorReporter + 'static,
    {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    pub fn states(&self) -> &HashMap<S, String> {
        &self.states
    }

    pub fn state_exists(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Transitions in declaration order.
    pub fn transitions(&self) -> &[TransitionDef<S>] {
        &self.transitions
    }

    pub fn transition_def(&self, name: &str) -> Option<&TransitionDef<S>> {
        self.index.get(name).map(|&position| &self.transitions[position])
    }

    pub fn dimensions(&self) -> &BTreeMap<String, DimensionNode> {
        &self.dimensions
    }

    /// Changes committed through this engine.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    // ---- state queries ----

    /// The owner's state as stored. No default is applied.
    pub fn current_state<O: Owner<S>>(&self, owner: &O) -> Option<S> {
        owner.state()
    }

    pub fn is_state<O: Owner<S>>(&self, owner: &O, state: &S) -> bool {
        owner.state().as_ref() == Some(state)
    }

    /// Label of `state`, or of the owner's current state when `None`.
    ///
    /// Never fails: undeclared or missing states map to [`UNKNOWN_LABEL`].
    pub fn state_label<O: Owner<S>>(&self, owner: &O, state: Option<&S>) -> &str {
        let state = state.cloned().or_else(|| owner.state());
        state
            .as_ref()
            .and_then(|s| self.states.get(s))
            .map_or(UNKNOWN_LABEL, String::as_str)
    }

    // ---- direct assignment ----

    /// Assign `target` directly, bypassing the transition graph.
    ///
    /// With `trigger_events`, the leave/enter hooks run around the write.
    /// A before-hook veto prevents the write. Persistence failure returns
    /// `false` without restoring the previous in-memory value. An
    /// after-hook veto also returns `false` even though the change was
    /// already persisted.
    pub fn set_state<O: Owner<S>>(
        &mut self,
        owner: &mut O,
        target: S,
        trigger_events: bool,
    ) -> bool {
        self.last_errors.clear();

        if !self.state_exists(&target) {
            tracing::debug!(
                attribute = %self.attribute,
                state = %target,
                "Rejected assignment to undefined state"
            );
            self.last_errors
                .push(ErrorRecord::StateUndefined { state: target });
            return false;
        }

        let from = owner.state();

        if trigger_events {
            let mut before = Vec::with_capacity(2);
            if let Some(from) = &from {
                before.push(Hook::BeforeLeaveState(from.clone()));
            }
            before.push(Hook::BeforeEnterState(target.clone()));
            if !self.dispatch_phase(owner, before) {
                return false;
            }
        }

        if !self.commit(owner, None, from.clone(), target.clone()) {
            return false;
        }

        if trigger_events {
            let mut after = Vec::with_capacity(2);
            if let Some(from) = from {
                after.push(Hook::AfterLeaveState(from));
            }
            after.push(Hook::AfterEnterState(target));
            if !self.dispatch_phase(owner, after) {
                return false;
            }
        }

        true
    }

    // ---- guarded transitions ----

    /// Check whether `name` may fire from the owner's current state.
    ///
    /// Applies the default state to an owner that has none.
    pub fn can_transition<O: Owner<S>>(&mut self, owner: &mut O, name: &str) -> bool {
        self.last_errors.clear();

        let Some(from) = self.transition_def(name).map(|def| def.from.clone()) else {
            tracing::debug!(attribute = %self.attribute, transition = name, "Undefined transition");
            self.last_errors.push(ErrorRecord::EventUndefined {
                transition: name.to_string(),
            });
            return false;
        };

        self.apply_default(owner);

        if owner.state().as_ref() != Some(&from) {
            let state = self.state_label(owner, None).to_string();
            tracing::debug!(
                attribute = %self.attribute,
                transition = name,
                current = %state,
                "Transition does not apply to current state"
            );
            self.last_errors.push(ErrorRecord::EventStateMismatch {
                transition: name.to_string(),
                state,
            });
            return false;
        }

        self.run_validation(owner, name)
    }

    pub fn cannot_transition<O: Owner<S>>(&mut self, owner: &mut O, name: &str) -> bool {
        !self.can_transition(owner, name)
    }

    /// Dispatch the validate hook of `name` without checking the graph.
    pub fn validate_transition<O: Owner<S>>(&mut self, owner: &mut O, name: &str) -> bool {
        self.last_errors.clear();
        self.run_validation(owner, name)
    }

    /// Names of transitions leaving the current state, in declaration order.
    ///
    /// With `run_validate`, candidates whose validate hook vetoes are
    /// dropped and the vetoes are recorded.
    pub fn available_transitions<O: Owner<S>>(
        &mut self,
        owner: &mut O,
        run_validate: bool,
    ) -> Vec<String> {
        self.last_errors.clear();

        let current = owner.state();
        let candidates: Vec<String> = self
            .transitions
            .iter()
            .filter(|def| current.as_ref() == Some(&def.from))
            .map(|def| def.name.clone())
            .collect();

        if !run_validate {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|name| self.run_validation(owner, name))
            .collect()
    }

    /// Fire transition `name` with the full hook protocol.
    ///
    /// Order: guard, before-leave, before-enter, before-transition, write and
    /// persist, after-leave, after-enter, after-transition. Before-hooks can
    /// block; after-hooks are notifications, so their vetoes are recorded
    /// and the call still returns `true`.
    pub fn transition<O: Owner<S>>(&mut self, owner: &mut O, name: &str) -> bool {
        if !self.can_transition(owner, name) {
            return false;
        }

        let Some(def) = self.transition_def(name).cloned() else {
            return false;
        };

        let before = vec![
            Hook::BeforeLeaveState(def.from.clone()),
            Hook::BeforeEnterState(def.to.clone()),
            Hook::BeforeTransition(def.name.clone()),
        ];
        if !self.dispatch_phase(owner, before) {
            return false;
        }

        if !self.commit(owner, Some(&def.name), Some(def.from.clone()), def.to.clone()) {
            return false;
        }

        let after = vec![
            Hook::AfterLeaveState(def.from),
            Hook::AfterEnterState(def.to),
            Hook::AfterTransition(def.name),
        ];
        // The change is already persisted; a veto here is only recorded.
        self.dispatch_phase(owner, after);

        true
    }

    /// Resolve a transition name through the dimension mapping and fire it.
    ///
    /// Returns `false` without dispatching anything when the keys do not
    /// lead to a transition name.
    pub fn transition_by_dimension<O, K>(&mut self, owner: &mut O, keys: &[K]) -> bool
    where
        O: Owner<S>,
        K: AsRef<str>,
    {
        self.last_errors.clear();

        let Some(name) = resolve_dimension(&self.dimensions, keys).map(str::to_string) else {
            tracing::debug!(
                attribute = %self.attribute,
                keys = ?keys.iter().map(|k| k.as_ref()).collect::<Vec<&str>>(),
                "Dimension keys resolve to no transition"
            );
            return false;
        };

        self.transition(owner, &name)
    }

    // ---- error log ----

    /// First error of the most recent operation, empty when there is none.
    pub fn last_error(&self) -> String {
        self.last_errors
            .first()
            .map(|record| record.render(&*self.reporter))
            .unwrap_or_default()
    }

    /// Every error of the most recent operation, in recording order.
    pub fn all_errors(&self) -> Vec<String> {
        self.last_errors
            .iter()
            .map(|record| record.render(&*self.reporter))
            .collect()
    }

    pub fn errors(&self) -> &[ErrorRecord<S>] {
        &self.last_errors
    }

    // ---- internals ----

    fn apply_default<O: Owner<S>>(&self, owner: &mut O) {
        if owner.state().is_none() {
            tracing::debug!(
                attribute = %self.attribute,
                state = %self.default_state,
                "Applying default state"
            );
            owner.set_state(self.default_state.clone());
        }
    }

    fn run_validation<O: Owner<S>>(&mut self, owner: &mut O, name: &str) -> bool {
        self.dispatch_phase(owner, vec![Hook::ValidateTransition(name.to_string())])
    }

    /// Dispatch `hooks` in order, stopping at the first veto.
    ///
    /// Vetoes from hooks that cannot block arrive after the commit and are
    /// logged as warnings.
    fn dispatch_phase<O: Owner<S>>(&mut self, owner: &mut O, hooks: Vec<Hook<S>>) -> bool {
        for hook in hooks {
            if let Err(veto) = owner.dispatch(&hook) {
                if hook.kind().can_block() {
                    tracing::debug!(
                        attribute = %self.attribute,
                        event = %hook,
                        reason = %veto,
                        "Hook vetoed"
                    );
                } else {
                    tracing::warn!(
                        attribute = %self.attribute,
                        event = %hook,
                        reason = %veto,
                        "After-hook vetoed a committed change"
                    );
                }
                self.last_errors.push(ErrorRecord::Vetoed(veto));
                return false;
            }
        }
        true
    }

    /// Write `to` into the owner and persist it.
    fn commit<O: Owner<S>>(
        &mut self,
        owner: &mut O,
        transition: Option<&str>,
        from: Option<S>,
        to: S,
    ) -> bool {
        owner.set_state(to.clone());
        if !owner.persist() {
            tracing::warn!(
                attribute = %self.attribute,
                transition = transition.unwrap_or_default(),
                to = %to,
                "Owner failed to persist state change"
            );
            return false;
        }

        tracing::info!(
            attribute = %self.attribute,
            transition = transition.unwrap_or_default(),
            from = ?from,
            to = %to,
            "State change committed"
        );
        self.history.push(StateChange {
            transition: transition.map(str::to_string),
            from,
            to,
            timestamp: Utc::now(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransitionDecl;
    use crate::hooks::{EventBus, HookKind, Veto};
    use crate::machine::ErrorCode;
    use std::sync::{Arc, Mutex};

    struct Account {
        status: Option<i32>,
        saves: usize,
        fail_persist: bool,
        bus: EventBus<Account, i32>,
    }

    impl Account {
        fn new(status: Option<i32>) -> Self {
            Self {
                status,
                saves: 0,
                fail_persist: false,
                bus: EventBus::new(),
            }
        }
    }

    impl Owner<i32> for Account {
        fn state(&self) -> Option<i32> {
            self.status
        }

        fn set_state(&mut self, state: i32) {
            self.status = Some(state);
        }

        fn persist(&mut self) -> bool {
            if self.fail_persist {
                return false;
            }
            self.saves += 1;
            true
        }

        fn dispatch(&mut self, hook: &Hook<i32>) -> Result<(), Veto> {
            let this: &Self = self;
            this.bus.dispatch(this, hook)
        }
    }

    fn machine() -> StrictState<i32> {
        StrictState::new(FsmConfig {
            attribute: "status".to_string(),
            default_state: 1,
            states: HashMap::from([
                (1, "active".to_string()),
                (2, "inactive".to_string()),
                (3, "closed".to_string()),
            ]),
            transitions: vec![
                TransitionDecl::new("deactivate", 1, 2),
                TransitionDecl::new("close", 1, 3),
                TransitionDecl::new("activate", 2, 1),
            ],
            dimensions: serde_json::from_str(r#"{"a": {"b": "activate"}}"#).unwrap(),
        })
        .unwrap()
    }

    fn record_all(account: &mut Account, log: &Arc<Mutex<Vec<String>>>) {
        for (kind, param) in [
            (HookKind::ValidateTransition, "deactivate"),
            (HookKind::BeforeLeaveState, "1"),
            (HookKind::BeforeEnterState, "2"),
            (HookKind::BeforeTransition, "deactivate"),
            (HookKind::AfterLeaveState, "1"),
            (HookKind::AfterEnterState, "2"),
            (HookKind::AfterTransition, "deactivate"),
        ] {
            let log = Arc::clone(log);
            account.bus.on_event(kind, param, move |_, hook| {
                log.lock().unwrap().push(hook.event_name());
                Ok(())
            });
        }
    }

    #[test]
    fn new_rejects_undeclared_default() {
        let result = StrictState::new(FsmConfig {
            attribute: "status".to_string(),
            default_state: 5,
            states: HashMap::from([(1, "active".to_string())]),
            transitions: vec![],
            dimensions: BTreeMap::new(),
        });
        assert!(matches!(
            result,
            Err(ConfigError::DefaultStateUndefined { .. })
        ));
    }

    #[test]
    fn default_state_is_checked_before_transitions() {
        let result = StrictState::new(FsmConfig {
            attribute: "status".to_string(),
            default_state: 5,
            states: HashMap::from([(1, "active".to_string())]),
            transitions: vec![TransitionDecl::new("x", 1, 1), TransitionDecl::new("x", 1, 1)],
            dimensions: BTreeMap::new(),
        });
        assert!(matches!(
            result,
            Err(ConfigError::DefaultStateUndefined { .. })
        ));
    }

    #[test]
    fn queries_read_owner_attribute() {
        let fsm = machine();
        let account = Account::new(Some(2));

        assert_eq!(fsm.current_state(&account), Some(2));
        assert!(fsm.is_state(&account, &2));
        assert!(!fsm.is_state(&account, &1));
        assert_eq!(fsm.state_label(&account, None), "inactive");
        assert_eq!(fsm.state_label(&account, Some(&3)), "closed");
        assert_eq!(fsm.state_label(&account, Some(&42)), UNKNOWN_LABEL);
    }

    #[test]
    fn queries_apply_no_default() {
        let fsm = machine();
        let account = Account::new(None);

        assert_eq!(fsm.current_state(&account), None);
        assert_eq!(fsm.state_label(&account, None), UNKNOWN_LABEL);
    }

    #[test]
    fn can_transition_applies_default_lazily() {
        let mut fsm = machine();
        let mut account = Account::new(None);

        assert!(fsm.can_transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(1));
        assert_eq!(account.saves, 0);
    }

    #[test]
    fn undefined_transition_is_recorded() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));

        assert!(fsm.cannot_transition(&mut account, "fly"));
        assert_eq!(fsm.errors()[0].code(), Some(ErrorCode::EventUndefined));
        assert_eq!(fsm.last_error(), "Undefined transition fly");
    }

    #[test]
    fn mismatch_reports_current_label() {
        let mut fsm = machine();
        let mut account = Account::new(Some(2));

        assert!(!fsm.can_transition(&mut account, "deactivate"));
        assert_eq!(
            fsm.errors(),
            &[ErrorRecord::<i32>::EventStateMismatch {
                transition: "deactivate".to_string(),
                state: "inactive".to_string(),
            }]
        );
    }

    #[test]
    fn validate_hook_vetoes_transition() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        account
            .bus
            .on(Hook::ValidateTransition("deactivate".to_string()), |_, _| {
                Err(Veto::new("insufficient balance"))
            });

        assert!(!fsm.can_transition(&mut account, "deactivate"));
        assert_eq!(fsm.last_error(), "insufficient balance");
        assert!(!fsm.transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(1));
        assert_eq!(account.saves, 0);
    }

    #[test]
    fn validate_transition_ignores_graph() {
        let mut fsm = machine();
        let mut account = Account::new(Some(3));

        assert!(fsm.validate_transition(&mut account, "deactivate"));
        assert!(fsm.errors().is_empty());
    }

    #[test]
    fn transition_fires_hooks_in_order() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        let log = Arc::new(Mutex::new(Vec::new()));
        record_all(&mut account, &log);

        assert!(fsm.transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(2));
        assert_eq!(account.saves, 1);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "validate-transition:deactivate",
                "before-leave-state:1",
                "before-enter-state:2",
                "before-transition:deactivate",
                "after-leave-state:1",
                "after-enter-state:2",
                "after-transition:deactivate",
            ]
        );
    }

    #[test]
    fn before_transition_veto_blocks_mutation() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        let log = Arc::new(Mutex::new(Vec::new()));
        account
            .bus
            .on(Hook::BeforeTransition("deactivate".to_string()), |_, _| {
                Err(Veto::new("frozen"))
            });
        record_all(&mut account, &log);

        assert!(!fsm.transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(1));
        assert_eq!(account.saves, 0);
        assert!(fsm.history().is_empty());
        assert!(!log
            .lock()
            .unwrap()
            .iter()
            .any(|event| event.starts_with("after-")));
    }

    #[test]
    fn after_veto_keeps_committed_transition() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        account.bus.on(Hook::AfterEnterState(2), |_, _| {
            Err(Veto::new("notification failed"))
        });

        assert!(fsm.transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(2));
        assert_eq!(account.saves, 1);
        assert_eq!(fsm.last_error(), "notification failed");
        assert_eq!(fsm.history().transitions().len(), 1);
    }

    #[test]
    fn transitions_may_target_undeclared_states() {
        let mut fsm = StrictState::new(FsmConfig {
            attribute: "status".to_string(),
            default_state: 1,
            states: HashMap::from([(1, "active".to_string())]),
            transitions: vec![TransitionDecl::new("archive", 1, 9)],
            dimensions: BTreeMap::new(),
        })
        .unwrap();
        let mut account = Account::new(Some(1));

        assert!(fsm.transition(&mut account, "archive"));
        assert_eq!(account.status, Some(9));
        assert_eq!(fsm.state_label(&account, None), UNKNOWN_LABEL);

        let mut other = Account::new(Some(1));
        assert!(!fsm.set_state(&mut other, 9, false));
        assert_eq!(other.status, Some(1));
        assert_eq!(
            fsm.errors(),
            &[ErrorRecord::<i32>::StateUndefined { state: 9 }]
        );
    }

    #[test]
    fn long_running_history_grows_by_one_per_commit() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));

        for _ in 0..5_000 {
            assert!(fsm.transition(&mut account, "deactivate"));
            assert!(fsm.transition(&mut account, "activate"));
        }

        assert_eq!(fsm.history().transitions().len(), 10_000);
        assert_eq!(account.saves, 10_000);
        let last = fsm.history().last().unwrap();
        assert_eq!(last.transition.as_deref(), Some("activate"));
        assert_eq!((last.from, last.to), (Some(2), 1));
    }

    #[test]
    fn persistence_failure_keeps_in_memory_value() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        account.fail_persist = true;

        assert!(!fsm.transition(&mut account, "deactivate"));
        assert_eq!(account.status, Some(2));
        assert!(fsm.errors().is_empty());
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn set_state_rejects_undefined_state() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));

        assert!(!fsm.set_state(&mut account, 99, true));
        assert_eq!(account.status, Some(1));
        assert_eq!(fsm.last_error(), "Undefined state 99");
    }

    #[test]
    fn set_state_bypasses_graph() {
        let mut fsm = machine();
        let mut account = Account::new(Some(2));
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        account.bus.on(Hook::BeforeEnterState(3), move |_, hook| {
            sink.lock().unwrap().push(hook.event_name());
            Ok(())
        });

        assert!(fsm.set_state(&mut account, 3, true));
        assert_eq!(account.status, Some(3));
        assert_eq!(*log.lock().unwrap(), vec!["before-enter-state:3"]);
        assert!(fsm.history().last().is_some_and(|c| c.is_direct()));
    }

    #[test]
    fn set_state_before_veto_blocks_write() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        account
            .bus
            .on(Hook::BeforeLeaveState(1), |_, _| Err(Veto::new("locked")));

        assert!(!fsm.set_state(&mut account, 2, true));
        assert_eq!(account.status, Some(1));
        assert_eq!(account.saves, 0);

        // Without events the listener is never consulted.
        assert!(fsm.set_state(&mut account, 2, false));
        assert_eq!(account.status, Some(2));
    }

    #[test]
    fn set_state_after_veto_returns_false_but_commits() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        account
            .bus
            .on(Hook::AfterEnterState(3), |_, _| Err(Veto::new("audit failed")));

        assert!(!fsm.set_state(&mut account, 3, true));
        assert_eq!(account.status, Some(3));
        assert_eq!(account.saves, 1);
        assert_eq!(fsm.all_errors(), vec!["audit failed".to_string()]);
    }

    #[test]
    fn available_transitions_follow_declaration_order() {
        let mut fsm = machine();
        let mut account = Account::new(Some(1));
        assert_eq!(
            fsm.available_transitions(&mut account, true),
            vec!["deactivate".to_string(), "close".to_string()]
        );

        account
            .bus
            .on(Hook::ValidateTransition("close".to_string()), |_, _| {
                Err(Veto::new("open balance"))
            });
        assert_eq!(
            fsm.available_transitions(&mut account, true),
            vec!["deactivate".to_string()]
        );
        assert_eq!(fsm.last_error(), "open balance");
        assert_eq!(
            fsm.available_transitions(&mut account, false),
            vec!["deactivate".to_string(), "close".to_string()]
        );
        assert!(fsm.errors().is_empty());
    }

    #[test]
    fn dimension_transition_resolves_name() {
        let mut fsm = machine();
        let mut account = Account::new(Some(2));

        assert!(!fsm.transition_by_dimension(&mut account, &["a", "x"]));
        assert_eq!(account.status, Some(2));

        assert!(fsm.transition_by_dimension(&mut account, &["a", "b"]));
        assert_eq!(account.status, Some(1));
    }

    #[test]
    fn custom_reporter_formats_errors() {
        let mut fsm = machine().with_reporter(|code: ErrorCode, args: &[String]| {
            format!("{}: {}", code, args.join(" / "))
        });
        let mut account = Account::new(Some(2));

        assert!(!fsm.transition(&mut account, "close"));
        assert_eq!(fsm.last_error(), "EventStateMismatch: close / inactive");
    }

    #[test]
    fn errors_are_cleared_per_call() {
        let mut fsm = machine();
        let mut account = Account::new(Some(2));

        assert!(!fsm.can_transition(&mut account, "close"));
        assert!(!fsm.last_error().is_empty());
        assert!(fsm.can_transition(&mut account, "activate"));
        assert_eq!(fsm.last_error(), "");
    }
}
