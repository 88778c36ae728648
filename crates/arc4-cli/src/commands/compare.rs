//! Comparison commands
//!
//! Usage:
//!   arc4 diff <A> <B> [--raw] [--pretty]
//!   arc4 equiv <A> <B>

use super::load_contract;
use arc4_core::{diff_values, Diff, Equivalent};
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Left contract JSON file
    pub left: PathBuf,

    /// Right contract JSON file
    pub right: PathBuf,

    /// Compare the documents as written, without parsing them as contracts
    #[arg(long)]
    pub raw: bool,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct EquivArgs {
    /// Left contract JSON file
    pub left: PathBuf,

    /// Right contract JSON file
    pub right: PathBuf,
}

fn read_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Print the diff report, or `null` when there is no difference
pub fn execute_diff(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = if args.raw {
        let left = read_document(&args.left)?;
        let right = read_document(&args.right)?;
        diff_values(&left, &right)?.unwrap_or(Value::Null)
    } else {
        let left = load_contract(&args.left)?;
        let right = load_contract(&args.right)?;
        serde_json::to_value(left.diff(&right))?
    };
    tracing::debug!(changed = !report.is_null(), "diff computed");

    let text = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", text);
    Ok(())
}

/// Print the verdict and return it
pub fn execute_equiv(args: EquivArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let left = load_contract(&args.left)?;
    let right = load_contract(&args.right)?;
    let equivalent = left.is_equivalent(&right);
    println!("{}", if equivalent { "equivalent" } else { "not equivalent" });
    Ok(equivalent)
}
