#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use strictstate::prelude::*;

/// Test owner with an embedded event bus and a persistence counter.
pub struct Account {
    pub status: Option<i32>,
    pub saves: usize,
    pub fail_persist: bool,
    pub bus: EventBus<Account, i32>,
}

impl Account {
    pub fn new(status: Option<i32>) -> Self {
        Self {
            status,
            saves: 0,
            fail_persist: false,
            bus: EventBus::new(),
        }
    }

    /// Record every dispatched event name that reaches one of `events`.
    pub fn trace(&mut self, events: &[(HookKind, &str)]) -> Arc<Mutex<Vec<String>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        for (kind, param) in events {
            let sink = Arc::clone(&log);
            self.bus.on_event(*kind, param, move |_, hook| {
                sink.lock().unwrap().push(hook.event_name());
                Ok(())
            });
        }
        log
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

/// States `{1: active, 2: inactive}`, default 1, one `deactivate` edge, and
/// the dimension mapping `{"a": {"b": "activate"}}`.
pub fn scenario_config() -> FsmConfig<i32> {
    FsmConfig::from_json(
        r#"{
            "attribute": "status",
            "default_state": 1,
            "states": {"1": "active", "2": "inactive"},
            "transitions": [
                {"name": "deactivate", "from": 1, "to": 2},
                {"name": "activate", "from": 2, "to": 1}
            ],
            "dimensions": {"a": {"b": "activate"}}
        }"#,
    )
    .unwrap()
}

pub fn scenario() -> StrictState<i32> {
    StrictState::new(scenario_config()).unwrap()
}

pub fn every_hook(
    transition: &'static str,
    from: &'static str,
    to: &'static str,
) -> Vec<(HookKind, &'static str)> {
    vec![
        (HookKind::ValidateTransition, transition),
        (HookKind::BeforeLeaveState, from),
        (HookKind::BeforeEnterState, to),
        (HookKind::BeforeTransition, transition),
        (HookKind::AfterLeaveState, from),
        (HookKind::AfterEnterState, to),
        (HookKind::AfterTransition, transition),
    ]
}
