//! arc4 CLI
//!
//! Command-line interface for inspecting and comparing contract descriptions

use arc4_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;

/// Exit status of `equiv` when the contracts differ
const EXIT_NOT_EQUIVALENT: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "arc4")]
#[command(about = "ARC-4 contract description toolkit", long_about = None)]
struct Cli {
    /// Logging profile: development, production or test
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the canonical signature and selector of a method
    Selector(commands::method::SelectorArgs),
    /// Print the JSON form of a method signature
    Method(commands::method::MethodArgs),
    /// Print the canonical JSON of a contract file
    Canonicalize(commands::contract::CanonicalizeArgs),
    /// Look up a method of a contract file by name
    Lookup(commands::contract::LookupArgs),
    /// Diff two contract files
    Diff(commands::compare::DiffArgs),
    /// Check two contract files for calling-convention equivalence
    Equiv(commands::compare::EquivArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Selector(args) => commands::method::execute_selector(args),
        Commands::Method(args) => commands::method::execute_method(args),
        Commands::Canonicalize(args) => commands::contract::execute_canonicalize(args),
        Commands::Lookup(args) => commands::contract::execute_lookup(args),
        Commands::Diff(args) => commands::compare::execute_diff(args),
        Commands::Equiv(args) => match commands::compare::execute_equiv(args) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(EXIT_NOT_EQUIVALENT),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
