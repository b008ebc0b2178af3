//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::{DimensionNode, FsmConfig, TransitionDecl};
use crate::core::StateId;
use crate::machine::StrictState;
use std::collections::{BTreeMap, HashMap};

/// Builder for machine configurations with a fluent API.
pub struct FsmBuilder<S: StateId> {
    attribute: Option<String>,
    default_state: Option<S>,
    states: HashMap<S, String>,
    transitions: Vec<TransitionDecl<S>>,
    dimensions: BTreeMap<String, DimensionNode>,
}

impl<S: StateId> FsmBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            attribute: None,
            default_state: None,
            states: HashMap::new(),
            transitions: Vec::new(),
            dimensions: BTreeMap::new(),
        }
    }

    /// Set the owner attribute name (required).
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    /// Set the default state (required).
    pub fn default_state(mut self, state: S) -> Self {
        self.default_state = Some(state);
        self
    }

    /// Declare a state with its label.
    pub fn state(mut self, state: S, label: impl Into<String>) -> Self {
        self.states.insert(state, label.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I, L>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        L: Into<String>,
    {
        self.states
            .extend(states.into_iter().map(|(state, label)| (state, label.into())));
        self
    }

    /// Declare a named transition.
    pub fn transition(mut self, name: impl Into<String>, from: S, to: S) -> Self {
        self.transitions.push(TransitionDecl::new(name, from, to));
        self
    }

    /// Add several declared transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = TransitionDecl<S>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Map a key path to a transition name.
    /// Returns an error if the path is empty or runs through an existing leaf.
    pub fn dimension(
        mut self,
        path: &[&str],
        transition: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let invalid = || BuildError::InvalidDimension {
            path: path.join("."),
        };

        let Some((last, parents)) = path.split_last() else {
            return Err(invalid());
        };

        let mut current = &mut self.dimensions;
        for key in parents {
            let node = current
                .entry((*key).to_string())
                .or_insert_with(|| DimensionNode::Nested(BTreeMap::new()));
            match node {
                DimensionNode::Nested(children) => current = children,
                DimensionNode::Transition(_) => return Err(invalid()),
            }
        }

        if matches!(current.get(*last), Some(DimensionNode::Nested(_))) {
            return Err(invalid());
        }
        current.insert((*last).to_string(), DimensionNode::Transition(transition.into()));
        Ok(self)
    }

    /// Produce the configuration without validating it.
    pub fn config(self) -> Result<FsmConfig<S>, BuildError> {
        let attribute = self.attribute.ok_or(BuildError::MissingAttribute)?;
        let default_state = self.default_state.ok_or(BuildError::MissingDefaultState)?;

        Ok(FsmConfig {
            attribute,
            default_state,
            states: self.states,
            transitions: self.transitions,
            dimensions: self.dimensions,
        })
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the configuration
    /// is rejected.
    pub fn build(self) -> Result<StrictState<S>, BuildError> {
        let config = self.config()?;
        Ok(StrictState::new(config)?)
    }
}

impl<S: StateId> Default for FsmBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
