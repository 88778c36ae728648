//! ARC-4 contract description toolkit
//!
//! This crate provides typed descriptors for application contract
//! interfaces, including:
//! - Argument, Returns, Method, NetworkInfo and Contract models with a
//!   generic map form and JSON encoding
//! - Method signature parsing and 4-byte selector computation
//! - A structural diff engine with deterministic reports
//! - A calling-convention equivalence check
//!
//! Descriptors are immutable once built; every operation is pure apart from
//! structured logging at the public boundaries.

pub mod abi_type;
pub mod diff;
pub mod equivalence;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod selector;
pub mod signature;

pub use arc4_core_types;

// Re-export commonly used types
pub use abi_type::AbiType;
pub use diff::{diff_values, ContractDiff, Diff, MethodDiff};
pub use equivalence::Equivalent;
pub use errors::{Arc4Error, ErrorKind, ExError, Result};
pub use model::{
    get_method_by_name, ArgType, Argument, Contract, Dictify, Format, Method, NetworkInfo,
    ReturnType, Returns,
};
pub use selector::Selector;
