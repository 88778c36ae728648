//! Diff report types.
//!
//! Field order of every report struct follows the field order of the entity
//! it describes, and serialization keeps that order. A before/after pair
//! serializes as a two-element array; an unchanged field serializes as
//! `null`.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Before/after values of a changed field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change<T>(pub T, pub T);

impl<T> Change<T> {
    pub fn before(&self) -> &T {
        &self.0
    }

    pub fn after(&self) -> &T {
        &self.1
    }
}

/// Difference between two lists of entities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListDelta<D> {
    /// Same length: one slot per position, `None` where the elements are equal
    Aligned(Vec<Option<D>>),
    /// Different lengths: both full lists in generic map form
    Replaced(Change<Vec<Value>>),
}

/// One slot of a keyed or name-paired comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<D> {
    /// Present on both sides and different
    Modified(D),
    /// Present only on the left side
    Removed(Value),
    /// Present only on the right side
    Added(Value),
}

impl<D: Serialize> Serialize for Entry<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Modified(delta) => delta.serialize(serializer),
            Entry::Removed(value) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(value)?;
                pair.serialize_element(&Value::Null)?;
                pair.end()
            }
            Entry::Added(value) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(&Value::Null)?;
                pair.serialize_element(value)?;
                pair.end()
            }
        }
    }
}

/// Keyed comparison: one slot per key of either side, `None` where the values are equal
pub type MapDelta<D> = BTreeMap<String, Option<Entry<D>>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentDiff {
    #[serde(rename = "type")]
    pub arg_type: Option<Change<String>>,
    pub name: Option<Change<Option<String>>>,
    pub desc: Option<Change<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnsDiff {
    #[serde(rename = "type")]
    pub return_type: Option<Change<String>>,
    pub desc: Option<Change<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDiff {
    /// Left-hand name, reported even when unchanged so the slot can be identified
    pub name: String,
    pub desc: Option<Change<Option<String>>>,
    pub args: Option<ListDelta<ArgumentDiff>>,
    pub returns: Option<ReturnsDiff>,
    pub txn_calls: Option<Change<usize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkInfoDiff {
    #[serde(rename = "appID")]
    pub app_id: Option<Change<u64>>,
}

/// Difference between the method lists of two contracts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MethodsDelta {
    /// Methods paired by name: shared names, then left-only, then right-only
    ByName(Vec<Option<Entry<MethodDiff>>>),
    /// Either contract overloads a name, so both lists are reported whole
    Replaced(Change<Vec<Value>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractDiff {
    pub name: Option<Change<String>>,
    pub desc: Option<Change<Option<String>>>,
    pub methods: Option<MethodsDelta>,
    pub networks: Option<MapDelta<NetworkInfoDiff>>,
}
