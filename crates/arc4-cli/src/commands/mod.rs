pub mod compare;
pub mod contract;
pub mod method;

use arc4_core::Contract;
use std::path::Path;

/// Read and parse a contract description file
pub(crate) fn load_contract(path: &Path) -> Result<Contract, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(Contract::from_json(&text)?)
}
