//! Declarative machine configuration.
//!
//! A configuration names the owner attribute, the declared states with
//! their labels, the named transitions and an optional dimension mapping.
//! It is plain data: build it in code, with [`FsmBuilder`], or load it from
//! JSON.
//!
//! # Example
//!
//! ```rust
//! use strictstate::config::FsmConfig;
//!
//! let config: FsmConfig<i32> = FsmConfig::from_json(
//!     r#"{
//!         "attribute": "status",
//!         "default_state": 1,
//!         "states": {"1": "active", "2": "inactive"},
//!         "transitions": [{"name": "deactivate", "from": 1, "to": 2}]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(config.audit().is_success());
//! ```
//!
//! [`FsmBuilder`]: crate::builder::FsmBuilder

mod dimension;
mod error;
mod validation;

pub use dimension::{resolve_dimension, DimensionNode};
pub use error::ConfigError;

pub(crate) use validation::{check_default_state, check_transitions};

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A transition as declared. Every field is optional so that incomplete
/// input can be reported instead of failing deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionDecl<S: StateId> {
    pub name: Option<String>,
    pub from: Option<S>,
    pub to: Option<S>,
}

impl<S: StateId> TransitionDecl<S> {
    pub fn new(name: impl Into<String>, from: S, to: S) -> Self {
        Self {
            name: Some(name.into()),
            from: Some(from),
            to: Some(to),
        }
    }
}

/// A validated transition: a named directed edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionDef<S: StateId> {
    pub name: String,
    pub from: S,
    pub to: S,
}

/// Full machine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FsmConfig<S: StateId> {
    /// Name of the owner attribute holding the state
    pub attribute: String,

    /// State applied lazily when the owner has none
    pub default_state: S,

    /// Declared states and their labels
    pub states: HashMap<S, String>,

    /// Transitions in declaration order
    #[serde(default)]
    pub transitions: Vec<TransitionDecl<S>>,

    /// Key path → transition name
    #[serde(default)]
    pub dimensions: BTreeMap<String, DimensionNode>,
}

impl<S: StateId> FsmConfig<S> {
    /// Parse a JSON configuration.
    ///
    /// Only the syntax is checked here; semantic checks happen when the
    /// configuration is handed to [`StrictState::new`].
    ///
    /// [`StrictState::new`]: crate::machine::StrictState::new
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check the whole configuration, collecting every violation.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        validation::audit(self)
    }
}
