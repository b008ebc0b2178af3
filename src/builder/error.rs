//! Build errors for the machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Owner attribute not specified. Call .attribute(name) before .build()")]
    MissingAttribute,

    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,

    #[error("Dimension path '{path}' is empty or conflicts with an existing entry")]
    InvalidDimension { path: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
