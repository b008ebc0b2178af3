//! Configuration checks.
//!
//! `check_*` functions fail fast and back `StrictState::new`. `audit`
//! runs the same checks but accumulates every violation with Stillwater's
//! `Validation`, so tooling can report all problems in one pass.

use super::error::ConfigError;
use super::{FsmConfig, TransitionDecl, TransitionDef};
use crate::core::StateId;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) fn check_default_state<S: StateId>(config: &FsmConfig<S>) -> Result<(), ConfigError> {
    if config.states.contains_key(&config.default_state) {
        Ok(())
    } else {
        Err(ConfigError::DefaultStateUndefined {
            state: config.default_state.key(),
        })
    }
}

fn check_transition<S: StateId>(
    index: usize,
    decl: &TransitionDecl<S>,
    seen: &mut HashSet<String>,
) -> Result<TransitionDef<S>, ConfigError> {
    let (Some(name), Some(from), Some(to)) = (&decl.name, &decl.from, &decl.to) else {
        return Err(ConfigError::IncompleteTransition { index });
    };
    if name.is_empty() {
        return Err(ConfigError::IncompleteTransition { index });
    }
    if !seen.insert(name.clone()) {
        return Err(ConfigError::DuplicateTransitionName { name: name.clone() });
    }

    Ok(TransitionDef {
        name: name.clone(),
        from: from.clone(),
        to: to.clone(),
    })
}

/// Validate transitions in declaration order, stopping at the first problem.
pub(crate) fn check_transitions<S: StateId>(
    config: &FsmConfig<S>,
) -> Result<Vec<TransitionDef<S>>, ConfigError> {
    let mut seen = HashSet::new();
    config
        .transitions
        .iter()
        .enumerate()
        .map(|(index, decl)| check_transition(index, decl, &mut seen))
        .collect()
}

/// Run every check, accumulating ALL violations.
pub(crate) fn audit<S: StateId>(config: &FsmConfig<S>) -> Validation<(), NonEmptyVec<ConfigError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

    checks.push(match check_default_state(config) {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    });

    let mut seen = HashSet::new();
    for (index, decl) in config.transitions.iter().enumerate() {
        checks.push(match check_transition(index, decl, &mut seen) {
            Ok(_) => Validation::success(()),
            Err(error) => Validation::fail(error),
        });
    }

    Validation::all_vec(checks).map(|_| ())
}
