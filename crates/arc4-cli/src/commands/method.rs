//! Method commands
//!
//! Usage:
//!   arc4 selector <SIGNATURE>
//!   arc4 method <SIGNATURE> [--canonical] [--pretty]

use arc4_core::{Dictify, Format, Method};
use clap::Args;

#[derive(Debug, Args)]
pub struct SelectorArgs {
    /// Method signature, e.g. "add(uint64,uint64)uint128"
    pub signature: String,
}

#[derive(Debug, Args)]
pub struct MethodArgs {
    /// Method signature, e.g. "add(uint64,uint64)uint128"
    pub signature: String,

    /// Emit canonical key order
    #[arg(long)]
    pub canonical: bool,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

/// Print `<signature> 0x<selector>`
pub fn execute_selector(args: SelectorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let method = Method::from_signature(&args.signature)?;
    println!("{} {}", method.signature(), method.selector());
    Ok(())
}

pub fn execute_method(args: MethodArgs) -> Result<(), Box<dyn std::error::Error>> {
    let method = Method::from_signature(&args.signature)?;
    let format = if args.canonical {
        Format::Canonical
    } else {
        Format::Standard
    };
    let value = method.dictify(format);
    let text = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", text);
    Ok(())
}
