//! Calling-convention equivalence.
//!
//! Two descriptions are equivalent when a caller cannot tell them apart by
//! invoking them: argument names, descriptions and method order do not
//! matter; types, transaction counts and deployments do.

use crate::diff::Diff;
use crate::model::{Argument, Contract, Method, Returns};
use crate::{log_op_end, log_op_start};

pub trait Equivalent {
    fn is_equivalent(&self, other: &Self) -> bool;
}

impl Equivalent for Argument {
    fn is_equivalent(&self, other: &Self) -> bool {
        self.arg_type().to_string() == other.arg_type().to_string()
    }
}

impl Equivalent for Returns {
    fn is_equivalent(&self, other: &Self) -> bool {
        self.return_type().to_string() == other.return_type().to_string()
    }
}

impl Equivalent for Method {
    fn is_equivalent(&self, other: &Self) -> bool {
        let Some(diff) = self.diff(other) else {
            return true;
        };
        // Any returns change counts, description included.
        if diff.returns.is_some() || diff.txn_calls.is_some() {
            return false;
        }
        self.args().len() == other.args().len()
            && self
                .args()
                .iter()
                .zip(other.args())
                .all(|(a, b)| a.is_equivalent(b))
    }
}

impl Equivalent for Contract {
    fn is_equivalent(&self, other: &Self) -> bool {
        log_op_start!("contract_equivalent", contract = self.name());
        let start = std::time::Instant::now();

        let result = contract_equivalent(self, other);

        log_op_end!(
            "contract_equivalent",
            duration_ms = start.elapsed().as_millis() as u64,
            equivalent = result
        );
        result
    }
}

fn contract_equivalent(a: &Contract, b: &Contract) -> bool {
    let Some(diff) = a.diff(b) else {
        return true;
    };
    if diff.networks.is_some() {
        return false;
    }
    if diff.methods.is_none() {
        return true;
    }
    if a.methods().len() != b.methods().len() {
        return false;
    }
    // Stable sort: overloads keep their relative order and pair by position.
    let mut left: Vec<&Method> = a.methods().iter().collect();
    let mut right: Vec<&Method> = b.methods().iter().collect();
    left.sort_by(|x, y| x.name().cmp(y.name()));
    right.sort_by(|x, y| x.name().cmp(y.name()));
    left.iter().zip(&right).all(|(x, y)| x.is_equivalent(y))
}
