//! Validator schema preparation
//!
//! Field definitions carry annotation keys meant for people and report
//! writers. A validator given those keys would reject them as unknown rules,
//! so they are stripped before the field map is handed over.

use serde_json::Value;

use crate::Result;
use crate::model::FieldMap;

/// Keys removed from every field definition, at any depth.
pub const ANNOTATION_KEYS: [&str; 5] = ["is_phi", "field_desc", "units", "min_exclusive", "unique"];

/// A JSON copy of `fields` with annotation keys removed, inside `anyof`
/// alternatives too.
///
/// Only annotation keys holding a scalar are dropped, so a field that happens
/// to be named `units` (whose value is a definition object) survives.
pub fn validator_schema(fields: &FieldMap) -> Result<Value> {
    let mut schema = serde_json::to_value(fields)?;
    if let Value::Object(map) = &mut schema {
        map.values_mut().for_each(strip_annotations);
    }
    Ok(schema)
}

fn strip_annotations(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, v| !(ANNOTATION_KEYS.contains(&key.as_str()) && is_scalar(v)));
            map.values_mut().for_each(strip_annotations);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_annotations),
        _ => {}
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}
