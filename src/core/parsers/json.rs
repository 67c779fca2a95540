use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Structure of a wordings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    /// Arbitrarily nested JSON, flattened to dot-joined paths.
    NestedJson,
    /// Flutter ARB: top-level keys taken verbatim, `@` metadata included.
    Arb,
}

/// Flatten a nested JSON value into a mapping from dot-joined path to leaf.
///
/// Objects and arrays are never emitted themselves, only their leaves. Array
/// elements use their index as path segment. `null` leaves are dropped.
pub fn flatten(value: &Value) -> BTreeMap<String, Value> {
    let mut result = BTreeMap::new();
    flatten_json(value, String::new(), &mut result);
    result
}

fn flatten_json(value: &Value, prefix: String, result: &mut BTreeMap<String, Value>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    };

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join(key), result);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                flatten_json(val, join(&index.to_string()), result);
            }
        }
        Value::Null => {}
        leaf => {
            if !prefix.is_empty() {
                result.insert(prefix, leaf.clone());
            }
        }
    }
}

/// Parse a wordings document into its key mapping.
///
/// `source_name` is only used for error messages.
pub fn parse_resource(
    content: &str,
    format: ResourceFormat,
    source_name: &str,
) -> Result<BTreeMap<String, Value>> {
    let json: Value = serde_json::from_str(content).map_err(|source| Error::Json {
        source_name: source_name.to_string(),
        source,
    })?;
    Ok(resource_entries(json, format, source_name))
}

pub(crate) fn resource_entries(
    json: Value,
    format: ResourceFormat,
    source_name: &str,
) -> BTreeMap<String, Value> {
    match format {
        ResourceFormat::NestedJson => flatten(&json),
        ResourceFormat::Arb => match json {
            Value::Object(map) => map.into_iter().collect(),
            _ => {
                warn!(source = source_name, "ARB document is not an object, no keys read");
                BTreeMap::new()
            }
        },
    }
}
