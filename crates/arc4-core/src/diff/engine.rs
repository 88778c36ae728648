//! Structural diff of contract descriptions.
//!
//! Every entity implements [`Diff`]: equal entities produce `None`, anything
//! else produces a report whose fields mirror the entity's fields.

use crate::diff::model::{
    ArgumentDiff, Change, ContractDiff, Entry, ListDelta, MapDelta, MethodDiff, MethodsDelta,
    NetworkInfoDiff, ReturnsDiff,
};
use crate::model::{Argument, Contract, Dictify, Format, Method, NetworkInfo, Returns};
use crate::{log_op_end, log_op_start};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Structural comparison against another value of the same type
pub trait Diff {
    type Delta;

    /// `None` when `self == other`, otherwise a report of what differs
    fn diff(&self, other: &Self) -> Option<Self::Delta>;
}

fn diff_scalar<T: PartialEq + Clone>(a: &T, b: &T) -> Option<Change<T>> {
    if a == b {
        None
    } else {
        Some(Change(a.clone(), b.clone()))
    }
}

fn dictify_all<T: Dictify>(items: &[T]) -> Vec<Value> {
    items.iter().map(|i| i.dictify(Format::Standard)).collect()
}

/// Lists of equal length are compared position by position; otherwise the
/// whole lists are reported.
pub fn diff_list<T>(a: &[T], b: &[T]) -> Option<ListDelta<T::Delta>>
where
    T: Diff + Dictify + PartialEq,
{
    if a == b {
        return None;
    }
    if a.len() == b.len() {
        Some(ListDelta::Aligned(
            a.iter().zip(b).map(|(x, y)| x.diff(y)).collect(),
        ))
    } else {
        Some(ListDelta::Replaced(Change(dictify_all(a), dictify_all(b))))
    }
}

/// Keys of either map get a slot; shared keys recurse.
pub fn diff_map<T>(a: &BTreeMap<String, T>, b: &BTreeMap<String, T>) -> Option<MapDelta<T::Delta>>
where
    T: Diff + Dictify + PartialEq,
{
    if a == b {
        return None;
    }
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    let delta = keys
        .into_iter()
        .map(|key| {
            let slot = match (a.get(key), b.get(key)) {
                (Some(x), Some(y)) => x.diff(y).map(Entry::Modified),
                (Some(x), None) => Some(Entry::Removed(x.dictify(Format::Standard))),
                (None, Some(y)) => Some(Entry::Added(y.dictify(Format::Standard))),
                (None, None) => None,
            };
            (key.clone(), slot)
        })
        .collect();
    Some(delta)
}

impl Diff for Argument {
    type Delta = ArgumentDiff;

    fn diff(&self, other: &Self) -> Option<ArgumentDiff> {
        if self == other {
            return None;
        }
        Some(ArgumentDiff {
            arg_type: diff_scalar(&self.arg_type().to_string(), &other.arg_type().to_string()),
            name: diff_scalar(&self.name().map(String::from), &other.name().map(String::from)),
            desc: diff_scalar(&self.desc().map(String::from), &other.desc().map(String::from)),
        })
    }
}

impl Diff for Returns {
    type Delta = ReturnsDiff;

    fn diff(&self, other: &Self) -> Option<ReturnsDiff> {
        if self == other {
            return None;
        }
        Some(ReturnsDiff {
            return_type: diff_scalar(
                &self.return_type().to_string(),
                &other.return_type().to_string(),
            ),
            desc: diff_scalar(&self.desc().map(String::from), &other.desc().map(String::from)),
        })
    }
}

impl Diff for Method {
    type Delta = MethodDiff;

    fn diff(&self, other: &Self) -> Option<MethodDiff> {
        if self == other {
            return None;
        }
        Some(MethodDiff {
            name: self.name().to_string(),
            desc: diff_scalar(&self.desc().map(String::from), &other.desc().map(String::from)),
            args: diff_list(self.args(), other.args()),
            returns: self.returns().diff(other.returns()),
            txn_calls: diff_scalar(&self.txn_calls(), &other.txn_calls()),
        })
    }
}

impl Diff for NetworkInfo {
    type Delta = NetworkInfoDiff;

    fn diff(&self, other: &Self) -> Option<NetworkInfoDiff> {
        diff_scalar(&self.app_id(), &other.app_id())
            .map(|app_id| NetworkInfoDiff { app_id: Some(app_id) })
    }
}

impl Diff for Contract {
    type Delta = ContractDiff;

    fn diff(&self, other: &Self) -> Option<ContractDiff> {
        log_op_start!("contract_diff", contract = self.name());
        let start = std::time::Instant::now();

        let result = if self == other {
            None
        } else {
            Some(ContractDiff {
                name: diff_scalar(&self.name().to_string(), &other.name().to_string()),
                desc: diff_scalar(&self.desc().map(String::from), &other.desc().map(String::from)),
                methods: diff_methods(self, other),
                networks: diff_map(self.networks(), other.networks()),
            })
        };

        log_op_end!(
            "contract_diff",
            duration_ms = start.elapsed().as_millis() as u64,
            changed = result.is_some()
        );
        result
    }
}

/// Pair methods by name, unless a name is overloaded on either side
///
/// Slots run shared names, then left-only, then right-only, each in name order.
fn diff_methods(a: &Contract, b: &Contract) -> Option<MethodsDelta> {
    if a.methods() == b.methods() {
        return None;
    }
    if a.has_overloaded_methods() || b.has_overloaded_methods() {
        return Some(MethodsDelta::Replaced(Change(
            dictify_all(a.methods()),
            dictify_all(b.methods()),
        )));
    }

    let left: BTreeMap<&str, &Method> = a.methods().iter().map(|m| (m.name(), m)).collect();
    let right: BTreeMap<&str, &Method> = b.methods().iter().map(|m| (m.name(), m)).collect();

    let shared = left
        .iter()
        .filter_map(|(name, m)| right.get(name).map(|other| m.diff(other).map(Entry::Modified)));
    let removed = left
        .iter()
        .filter(|(name, _)| !right.contains_key(*name))
        .map(|(_, m)| Some(Entry::Removed(m.dictify(Format::Standard))));
    let added = right
        .iter()
        .filter(|(name, _)| !left.contains_key(*name))
        .map(|(_, m)| Some(Entry::Added(m.dictify(Format::Standard))));

    Some(MethodsDelta::ByName(shared.chain(removed).chain(added).collect()))
}
