//! Contract description diff engine.
//!
//! Compares two descriptions and produces a structured report suitable for
//! review or for feeding the equivalence checker.
//!
//! ## Entry points
//!
//! ```
//! use arc4_core::diff::Diff;
//! use arc4_core::Method;
//!
//! let a = Method::from_signature("add(uint64,uint64)uint64").unwrap();
//! let b = Method::from_signature("add(uint64,uint64)uint128").unwrap();
//! let report = a.diff(&b).unwrap();
//! assert!(report.returns.is_some());
//! ```
//!
//! ## Guarantees
//!
//! - **Identity**: `x.diff(&x)` is `None` for every entity kind.
//! - **Determinism**: report field order follows entity field order; keyed
//!   sections are ordered by key.
//! - **Overloads**: if either contract overloads a method name, the method
//!   lists are reported whole instead of paired by name.

pub mod engine;
pub mod model;
pub mod value;

pub use engine::{diff_list, diff_map, Diff};
pub use model::{
    ArgumentDiff, Change, ContractDiff, Entry, ListDelta, MapDelta, MethodDiff, MethodsDelta,
    NetworkInfoDiff, ReturnsDiff,
};
pub use value::diff_values;
