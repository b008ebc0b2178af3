//! Configuration errors.

use thiserror::Error;

/// Errors that make a configuration unusable.
///
/// These are programming mistakes, not runtime conditions, so they are the
/// only errors the engine lets escape to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Default state '{state}' is not one of the declared states")]
    DefaultStateUndefined { state: String },

    #[error("Transition #{index} must define name, from and to")]
    IncompleteTransition { index: usize },

    #[error("Transition name '{name}' is declared more than once")]
    DuplicateTransitionName { name: String },

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),

    #[error("Configuration could not be serialized: {0}")]
    Serialize(String),
}
