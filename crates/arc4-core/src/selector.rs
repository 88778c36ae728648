//! Method selector computation.
//!
//! The selector is the first four bytes of the SHA-512/256 digest of the
//! canonical method signature.

use sha2::{Digest, Sha512_256};
use std::fmt;

/// Number of digest bytes kept as the selector
pub const SELECTOR_LEN: usize = 4;

/// A 4-byte method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    /// Compute the selector of a canonical signature string
    pub fn from_signature(signature: &str) -> Self {
        let digest = Sha512_256::digest(signature.as_bytes());
        let mut bytes = [0u8; SELECTOR_LEN];
        bytes.copy_from_slice(&digest[..SELECTOR_LEN]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }

    /// Lower-case hex, without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<Selector> for [u8; SELECTOR_LEN] {
    fn from(selector: Selector) -> Self {
        selector.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
