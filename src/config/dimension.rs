//! Nested key-path lookup resolving to a transition name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node of a dimension mapping: a transition name or a nested table.
///
/// Deserializes untagged, so JSON strings become leaves and JSON objects
/// become nested tables.
///
/// # Example
///
/// ```rust
/// use strictstate::config::{resolve_dimension, DimensionNode};
/// use std::collections::BTreeMap;
///
/// let mapping: BTreeMap<String, DimensionNode> =
///     serde_json::from_str(r#"{"refund": {"full": "close", "partial": "reopen"}}"#).unwrap();
///
/// assert_eq!(resolve_dimension(&mapping, &["refund", "full"]), Some("close"));
/// assert_eq!(resolve_dimension(&mapping, &["refund", "none"]), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionNode {
    Transition(String),
    Nested(BTreeMap<String, DimensionNode>),
}

impl DimensionNode {
    /// Empty leaves and empty tables count as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Transition(name) => name.is_empty(),
            Self::Nested(children) => children.is_empty(),
        }
    }
}

/// Walk `mapping` one key at a time.
///
/// Returns the first leaf reached; keys left over after it are ignored.
/// Returns `None` when a key is absent or empty, or when the keys run out
/// before a leaf is reached.
pub fn resolve_dimension<'a, K>(
    mapping: &'a BTreeMap<String, DimensionNode>,
    keys: &[K],
) -> Option<&'a str>
where
    K: AsRef<str>,
{
    let mut current = mapping;
    for key in keys {
        match current.get(key.as_ref()) {
            None => return None,
            Some(node) if node.is_empty() => return None,
            Some(DimensionNode::Transition(name)) => return Some(name.as_str()),
            Some(DimensionNode::Nested(children)) => current = children,
        }
    }
    None
}
