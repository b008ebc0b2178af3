//! Listener rejection signal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned by a listener to reject the hook it was handed.
///
/// During a before-phase a veto aborts the operation before the owner is
/// mutated. During the after-phase it is only recorded.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Veto {
    pub message: String,
}

impl Veto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn veto_displays_its_message() {
        let veto = Veto::new("insufficient balance");
        assert_eq!(veto.to_string(), "insufficient balance");
    }
}
