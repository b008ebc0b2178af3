//! Account Status Workflow
//!
//! Demonstrates a strict state machine attached to an account record:
//! - Guarded transitions with a business-rule validate hook
//! - Before-hooks vetoing a change, after-hooks reacting to one
//! - Dimension-keyed transitions selected by (reason, severity)
//! - Administrative override with `set_state`
//!
//! Run with: RUST_LOG=debug cargo run --example account_status

use strictstate::builder::toggle_pair;
use strictstate::prelude::*;
use strictstate::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Status {
        Active => "active",
        Suspended => "suspended",
        Closed => "closed",
    }
}

struct Account {
    id: u64,
    status: Option<Status>,
    balance: i64,
    bus: EventBus<Account, Status>,
}

impl Owner<Status> for Account {
    fn state(&self) -> Option<Status> {
        self.status
    }

    fn set_state(&mut self, state: Status) {
        self.status = Some(state);
    }

    fn persist(&mut self) -> bool {
        println!("  [db] account {} saved as {:?}", self.id, self.status);
        true
    }

    fn dispatch(&mut self, hook: &Hook<Status>) -> Result<(), Veto> {
        let this: &Self = self;
        this.bus.dispatch(this, hook)
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Account Status Example ===\n");

    let mut fsm = FsmBuilder::new()
        .attribute("status")
        .default_state(Status::Active)
        .states(Status::labels())
        .transitions(toggle_pair(
            "suspend",
            "reinstate",
            Status::Active,
            Status::Suspended,
        ))
        .transition("close", Status::Active, Status::Closed)
        .transition("close_suspended", Status::Suspended, Status::Closed)
        .dimension(&["fraud", "confirmed"], "close_suspended")?
        .dimension(&["fraud", "suspected"], "suspend")?
        .build()?;

    let mut account = Account {
        id: 7,
        status: None,
        balance: 120,
        bus: EventBus::new(),
    };

    account.bus.on(
        Hook::ValidateTransition("close".to_string()),
        |account: &Account, _hook: &Hook<Status>| {
            if account.balance != 0 {
                return Err(Veto::new(format!(
                    "account {} still holds a balance of {}",
                    account.id, account.balance
                )));
            }
            Ok(())
        },
    );
    account.bus.on(
        Hook::AfterEnterState(Status::Suspended),
        |account: &Account, _hook: &Hook<Status>| {
            println!("  [notify] account {} suspended", account.id);
            Ok(())
        },
    );

    println!("Step 1: What can an unset account do?");
    println!("  available: {:?}", fsm.available_transitions(&mut account, true));
    println!("  last error: {:?}\n", fsm.last_error());

    println!("Step 2: Try closing with a balance");
    let closed = fsm.transition(&mut account, "close");
    println!("  closed: {}, error: {}", closed, fsm.last_error());
    println!("  state: {}\n", fsm.state_label(&account, None));

    println!("Step 3: Suspected fraud, selected by dimension");
    let suspended = fsm.transition_by_dimension(&mut account, &["fraud", "suspected"]);
    println!("  suspended: {}", suspended);
    println!("  state: {}\n", fsm.state_label(&account, None));

    println!("Step 4: Unknown dimension path");
    let moved = fsm.transition_by_dimension(&mut account, &["chargeback", "lost"]);
    println!("  moved: {}\n", moved);

    println!("Step 5: Administrative override back to active");
    let overridden = fsm.set_state(&mut account, Status::Active, true);
    println!("  overridden: {} (expected {})", overridden, Status::Active.label());
    println!("  state: {}\n", fsm.state_label(&account, None));

    println!("History:");
    for change in fsm.history().transitions() {
        println!(
            "  {:?} -> {} via {}",
            change.from,
            change.to,
            change.transition.as_deref().unwrap_or("set_state")
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
