//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a macro for declaring states
//! and transitions with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;

use crate::config::TransitionDecl;
use crate::core::StateId;

/// Declare a two-way pair of transitions between `a` and `b`.
///
/// # Example
///
/// ```
/// use strictstate::builder::toggle_pair;
///
/// let [forward, back] = toggle_pair("deactivate", "activate", 1, 2);
/// assert_eq!(forward.from, Some(1));
/// assert_eq!(back.to, Some(1));
/// ```
pub fn toggle_pair<S: StateId>(
    forward: impl Into<String>,
    back: impl Into<String>,
    a: S,
    b: S,
) -> [TransitionDecl<S>; 2] {
    [
        TransitionDecl::new(forward, a.clone(), b.clone()),
        TransitionDecl::new(back, b, a),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pair_mirrors_edges() {
        let [forward, back] = toggle_pair("open", "close", 1, 2);

        assert_eq!(forward, TransitionDecl::new("open", 1, 2));
        assert_eq!(back, TransitionDecl::new("close", 2, 1));
    }
}
