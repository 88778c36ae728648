//! Contract description model.
//!
//! Every entity converts to and from the generic map form (a
//! `serde_json::Value` tree) through the [`Dictify`] capability. The diff
//! engine uses the same capability whenever it has to emit a whole entity.

pub mod argument;
pub mod contract;
pub mod method;

pub use argument::{ArgType, Argument, ReturnType, Returns};
pub use contract::{Contract, NetworkInfo};
pub use method::{get_method_by_name, Method};

use crate::errors::{Arc4Error, Result};
use serde_json::{Map, Value};

/// Serialization mode for the generic map form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Field order as declared, methods in insertion order
    #[default]
    Standard,
    /// Deterministic field presence and method order
    Canonical,
}

/// Conversion to and from the generic map form
pub trait Dictify: Sized {
    /// Build the generic map form of this entity
    fn dictify(&self, format: Format) -> Value;

    /// Rebuild an entity from its generic map form
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidField` — the map does not have the expected shape
    /// - `UnknownType` / `MalformedSignature` — a type string does not parse
    fn undictify(value: &Value) -> Result<Self>;
}

/// Drop empty strings: the wire format never carries them.
pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

pub(crate) fn as_object<'a>(value: &'a Value, entity: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Arc4Error::InvalidField {
        entity: entity.to_string(),
        field: "<root>".to_string(),
        reason: "expected an object".to_string(),
    })
}

pub(crate) fn required<'a>(
    map: &'a Map<String, Value>,
    entity: &str,
    field: &str,
) -> Result<&'a Value> {
    map.get(field).ok_or_else(|| Arc4Error::MissingField {
        entity: entity.to_string(),
        field: field.to_string(),
    })
}

fn invalid(entity: &str, field: &str, reason: &str) -> Arc4Error {
    Arc4Error::InvalidField {
        entity: entity.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

pub(crate) fn required_str<'a>(
    map: &'a Map<String, Value>,
    entity: &str,
    field: &str,
) -> Result<&'a str> {
    required(map, entity, field)?
        .as_str()
        .ok_or_else(|| invalid(entity, field, "expected a string"))
}

pub(crate) fn required_array<'a>(
    map: &'a Map<String, Value>,
    entity: &str,
    field: &str,
) -> Result<&'a Vec<Value>> {
    required(map, entity, field)?
        .as_array()
        .ok_or_else(|| invalid(entity, field, "expected an array"))
}

pub(crate) fn required_u64(map: &Map<String, Value>, entity: &str, field: &str) -> Result<u64> {
    required(map, entity, field)?
        .as_u64()
        .ok_or_else(|| invalid(entity, field, "expected an unsigned integer"))
}

/// An absent key and an explicit `null` both mean "not set".
pub(crate) fn optional_str(
    map: &Map<String, Value>,
    entity: &str,
    field: &str,
) -> Result<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(entity, field, "expected a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_filters_empty_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_optional_str_accepts_null_and_absent() {
        let v = json!({"a": null, "b": "text", "c": 3});
        let map = v.as_object().unwrap();
        assert_eq!(optional_str(map, "T", "a").unwrap(), None);
        assert_eq!(optional_str(map, "T", "missing").unwrap(), None);
        assert_eq!(optional_str(map, "T", "b").unwrap(), Some("text".into()));
        assert!(optional_str(map, "T", "c").is_err());
    }

    #[test]
    fn test_required_reports_missing_field() {
        let v = json!({});
        let err = required_str(v.as_object().unwrap(), "Method", "name").unwrap_err();
        assert_eq!(
            err,
            Arc4Error::MissingField {
                entity: "Method".into(),
                field: "name".into()
            }
        );
    }
}
