//! Contract file commands
//!
//! Usage:
//!   arc4 canonicalize <FILE> [--pretty]
//!   arc4 lookup <FILE> <NAME>

use super::load_contract;
use arc4_core::Format;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CanonicalizeArgs {
    /// Contract JSON file
    pub file: PathBuf,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Contract JSON file
    pub file: PathBuf,

    /// Method name
    pub name: String,
}

pub fn execute_canonicalize(args: CanonicalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let contract = load_contract(&args.file)?;
    let text = if args.pretty {
        contract.to_json_pretty(Format::Canonical)?
    } else {
        contract.to_json(Format::Canonical)?
    };
    println!("{}", text);
    Ok(())
}

/// Print `<signature> 0x<selector>` of the single method with that name
pub fn execute_lookup(args: LookupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let contract = load_contract(&args.file)?;
    let method = contract.get_method_by_name(&args.name)?;
    println!("{} {}", method.signature(), method.selector());
    Ok(())
}
