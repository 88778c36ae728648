//! Diff of untyped JSON documents.
//!
//! Applies the same shape rules as the typed engine to arbitrary
//! `serde_json::Value` trees. Used when two documents should be compared
//! as written, without parsing them into contracts first.

use crate::errors::{Arc4Error, Result};
use serde_json::{Map, Value};

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "list",
        Value::Object(_) => "map",
        _ => "scalar",
    }
}

fn pair(a: &Value, b: &Value) -> Value {
    Value::Array(vec![a.clone(), b.clone()])
}

/// Compare two documents.
///
/// Returns `None` for equal inputs. Unchanged slots inside a result are `null`.
///
/// # Errors
///
/// `TypeShapeMismatch` when a list, a map, or a non-null scalar meet at the
/// same position with a different shape. `null` pairs with anything as a
/// plain change.
pub fn diff_values(a: &Value, b: &Value) -> Result<Option<Value>> {
    if a == b {
        return Ok(None);
    }
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            if x.len() != y.len() {
                return Ok(Some(pair(a, b)));
            }
            let slots = x
                .iter()
                .zip(y)
                .map(|(p, q)| Ok(diff_values(p, q)?.unwrap_or(Value::Null)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Value::Array(slots)))
        }
        (Value::Object(x), Value::Object(y)) => Ok(Some(Value::Object(diff_objects(x, y)?))),
        (Value::Null, _) | (_, Value::Null) => Ok(Some(pair(a, b))),
        _ if shape(a) == shape(b) => Ok(Some(pair(a, b))),
        _ => Err(Arc4Error::TypeShapeMismatch {
            left: shape(a).to_string(),
            right: shape(b).to_string(),
        }),
    }
}

fn diff_objects(x: &Map<String, Value>, y: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut out = Map::new();
    for (key, left) in x {
        let slot = match y.get(key) {
            Some(right) => diff_values(left, right)?.unwrap_or(Value::Null),
            None => pair(left, &Value::Null),
        };
        out.insert(key.clone(), slot);
    }
    for (key, right) in y {
        if !x.contains_key(key) {
            out.insert(key.clone(), pair(&Value::Null, right));
        }
    }
    Ok(out)
}
