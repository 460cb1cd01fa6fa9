use serde_json::Map;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Error raised when a mapping is missing one or more required keys.
///
/// `keys` holds the missing names in the order they were declared required.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required keys: {}", .keys.join(", "))]
pub struct MissingKeysError {
    pub keys: Vec<String>,
}

/// Check that a mapping contains every required key.
///
/// Scans `required` in order and collects the absent keys; the check is a
/// precondition assertion, so callers are expected to treat the error as
/// fatal to the current generation step.
///
/// # Errors
///
/// Returns [`MissingKeysError`] listing the absent keys, in required-order,
/// if any are missing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use gyb_util::require_keys::ensure_required_keys;
///
/// let mut node = BTreeMap::new();
/// node.insert("kind".to_string(), 1);
/// node.insert("text".to_string(), 2);
///
/// assert!(ensure_required_keys(&node, &["kind", "text"]).is_ok());
///
/// let err = ensure_required_keys(&node, &["kind", "children"]).unwrap_err();
/// assert_eq!(err.keys, vec!["children"]);
/// ```
pub fn ensure_required_keys<V>(
    target: &BTreeMap<String, V>,
    required: &[&str],
) -> Result<(), MissingKeysError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !target.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingKeysError { keys: missing })
    }
}

/// Check that a HashMap contains every required key.
pub fn ensure_required_keys_hashmap<V>(
    target: &HashMap<String, V>,
    required: &[&str],
) -> Result<(), MissingKeysError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !target.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingKeysError { keys: missing })
    }
}

/// Check that a serde_json::Map contains every required key.
pub fn ensure_required_keys_map(
    target: &Map<String, serde_json::Value>,
    required: &[&str],
) -> Result<(), MissingKeysError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !target.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingKeysError { keys: missing })
    }
}
