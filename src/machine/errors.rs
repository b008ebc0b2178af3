//! Recorded runtime errors and their formatting.

use crate::core::StateId;
use crate::hooks::Veto;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codes of the guard errors the engine records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    StateUndefined,
    EventUndefined,
    EventStateMismatch,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StateUndefined => "StateUndefined",
            Self::EventUndefined => "EventUndefined",
            Self::EventStateMismatch => "EventStateMismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the per-call error log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum ErrorRecord<S: StateId> {
    /// Direct assignment to a state that is not declared
    StateUndefined { state: S },

    /// Transition name is not declared
    EventUndefined { transition: String },

    /// Transition does not start from the owner's current state.
    /// `state` holds the label of the current state.
    EventStateMismatch { transition: String, state: String },

    /// A listener rejected a hook
    Vetoed(Veto),
}

impl<S: StateId> ErrorRecord<S> {
    /// Guard code, `None` for vetoes.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::StateUndefined { .. } => Some(ErrorCode::StateUndefined),
            Self::EventUndefined { .. } => Some(ErrorCode::EventUndefined),
            Self::EventStateMismatch { .. } => Some(ErrorCode::EventStateMismatch),
            Self::Vetoed(_) => None,
        }
    }

    /// Message arguments in template order.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::StateUndefined { state } => vec![state.key()],
            Self::EventUndefined { transition } => vec![transition.clone()],
            Self::EventStateMismatch { transition, state } => {
                vec![transition.clone(), state.clone()]
            }
            Self::Vetoed(veto) => vec![veto.message.clone()],
        }
    }

    /// Human-readable text. Veto messages are already human text and
    /// bypass the reporter.
    pub fn render(&self, reporter: &dyn ErrorReporter) -> String {
        match (self.code(), self) {
            (Some(code), _) => reporter.format(code, &self.args()),
            (None, Self::Vetoed(veto)) => veto.message.clone(),
            (None, _) => String::new(),
        }
    }

    pub fn is_veto(&self) -> bool {
        matches!(self, Self::Vetoed(_))
    }
}

/// Turns an error code and its arguments into a message.
///
/// Inject a custom reporter with
/// [`StrictState::with_reporter`](crate::machine::StrictState::with_reporter)
/// to localize messages. Plain closures implement the trait.
pub trait ErrorReporter: Send + Sync {
    fn format(&self, code: ErrorCode, args: &[String]) -> String;
}

impl<F> ErrorReporter for F
where
    F: Fn(ErrorCode, &[String]) -> String + Send + Sync,
{
    fn format(&self, code: ErrorCode, args: &[String]) -> String {
        self(code, args)
    }
}

/// English messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultReporter;

impl ErrorReporter for DefaultReporter {
    fn format(&self, code: ErrorCode, args: &[String]) -> String {
        let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();
        match code {
            ErrorCode::StateUndefined => format!("Undefined state {}", arg(0)),
            ErrorCode::EventUndefined => format!("Undefined transition {}", arg(0)),
            ErrorCode::EventStateMismatch => format!(
                "Transition {} does not apply to current state {}",
                arg(0),
                arg(1)
            ),
        }
    }
}
