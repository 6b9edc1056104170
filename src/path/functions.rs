//! The functions
//!
use log::*;
use serde_json::Value;
use crate::errors::{EsStatsError, Result};

/// Resolve `path` against `document`, returning the value found after consuming all segments.
pub fn resolve<'a>(
    document: &'a Value,
    path: &str,
) -> Result<&'a Value>
{
    let mut current = document;
    for segment in path.split('.') {
        current = current
            .as_object()
            .and_then(|map| map.get(segment))
            .ok_or_else(|| EsStatsError::key_not_found(path, segment))?;
    }
    Ok(current)
}

/// Return every dotted path in `document` that leads to a value that is not a map with entries,
/// in document order.
///
/// A key that contains a dot, such as the index name `.kibana_1` in the cluster state, cannot be
/// addressed by [resolve]. Such keys are skipped together with everything below them, so every
/// returned path resolves back to its value.
pub fn leaf_paths(
    document: &Value,
) -> Vec<(String, &Value)>
{
    let mut leaves = Vec::new();
    if let Some(map) = document.as_object() {
        for (key, value) in map {
            add_leaf_paths(None, key, value, &mut leaves);
        }
    }
    leaves
}

fn add_leaf_paths<'a>(
    prefix: Option<&str>,
    key: &str,
    value: &'a Value,
    leaves: &mut Vec<(String, &'a Value)>,
)
{
    let path = match prefix {
        Some(prefix) => format!("{}.{}", prefix, key),
        None => key.to_string(),
    };
    if key.contains('.') {
        debug!("skipping {}: the key contains a dot", path);
        return;
    }
    match value.as_object() {
        Some(map) if !map.is_empty() => {
            for (key, child) in map {
                add_leaf_paths(Some(&path), key, child, leaves);
            }
        }
        _ => leaves.push((path, value)),
    }
}
