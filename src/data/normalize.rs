// ABOUTME: Map-key normalization for YAML-decoded value trees
// ABOUTME: Rewrites arbitrarily-keyed YAML mappings into string-keyed JSON values

use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use super::error::{DataError, Result};

/// Normalize a YAML-decoded tree into a JSON value whose mapping keys are all
/// strings. Scalars pass through unchanged, sequences keep their element
/// order, and non-string mapping keys are converted to their canonical string
/// form. Keys that collide after conversion overwrite earlier entries, unless
/// `strict` is set, in which case the collision is an error.
pub fn normalize_keys(value: YamlValue, strict: bool) -> Result<JsonValue> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(b) => Ok(JsonValue::Bool(b)),
        YamlValue::Number(n) => Ok(normalize_number(&n)),
        YamlValue::String(s) => Ok(JsonValue::String(s)),
        YamlValue::Sequence(items) => {
            let normalized: Result<Vec<JsonValue>> = items
                .into_iter()
                .map(|item| normalize_keys(item, strict))
                .collect();
            Ok(JsonValue::Array(normalized?))
        }
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, val) in mapping {
                let key = key_string(key);
                let val = normalize_keys(val, strict)?;
                if object.insert(key.clone(), val).is_some() && strict {
                    return Err(DataError::DuplicateKey { key });
                }
            }
            Ok(JsonValue::Object(object))
        }
        // Tags are resolved to the value they annotate
        YamlValue::Tagged(tagged) => normalize_keys(tagged.value, strict),
    }
}

fn normalize_number(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else if let Some(f) = n.as_f64() {
        // .inf and .nan have no JSON representation
        Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    } else {
        JsonValue::Null
    }
}

/// Canonical string form of a mapping key.
fn key_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_string(tagged.value),
        // Sequence and mapping keys fall back to their YAML rendering
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
