//! ABI type grammar.
//!
//! Validates type strings and renders them back in canonical form. Only the
//! shape of a type matters here: values are never encoded or decoded.
//!
//! ```text
//! type   := uint<N> | ufixed<N>x<M> | byte | bool | address | string
//!         | type "[" "]" | type "[" K "]" | "(" [type ("," type)*] ")"
//! ```

use crate::errors::{Arc4Error, Result};
use std::fmt;
use std::str::FromStr;

const MAX_BIT_SIZE: u16 = 512;
const MAX_PRECISION: u8 = 160;
/// Array suffixes plus tuple levels a single type string may stack
const MAX_NESTING: usize = 64;

/// A value type of the ABI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// `uint<N>` with 8 <= N <= 512 and N % 8 == 0
    Uint(u16),
    /// `ufixed<N>x<M>` with the `uint` bit rule for N and 1 <= M <= 160
    Ufixed(u16, u8),
    Byte,
    Bool,
    Address,
    String,
    StaticArray(Box<AbiType>, usize),
    DynamicArray(Box<AbiType>),
    Tuple(Vec<AbiType>),
}

fn parse_bit_size(s: &str, digits: &str) -> Result<u16> {
    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(Arc4Error::unknown_type(s, "malformed bit size"));
    }
    let bits: u16 = digits
        .parse()
        .map_err(|_| Arc4Error::unknown_type(s, "bit size out of range"))?;
    if bits % 8 != 0 || !(8..=MAX_BIT_SIZE).contains(&bits) {
        return Err(Arc4Error::unknown_type(
            s,
            format!("bit size must be a multiple of 8 between 8 and {}", MAX_BIT_SIZE),
        ));
    }
    Ok(bits)
}

fn parse_precision(s: &str, digits: &str) -> Result<u8> {
    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(Arc4Error::unknown_type(s, "malformed precision"));
    }
    let precision: u8 = digits
        .parse()
        .map_err(|_| Arc4Error::unknown_type(s, "precision out of range"))?;
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(Arc4Error::unknown_type(
            s,
            format!("precision must be between 1 and {}", MAX_PRECISION),
        ));
    }
    Ok(precision)
}

fn parse_array_len(s: &str, digits: &str) -> Result<usize> {
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !well_formed {
        return Err(Arc4Error::unknown_type(s, "malformed static array length"));
    }
    digits
        .parse()
        .map_err(|_| Arc4Error::unknown_type(s, "static array length out of range"))
}

impl FromStr for AbiType {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_with_depth(s, 0)
    }
}

fn parse_with_depth(s: &str, depth: usize) -> Result<AbiType> {
    if depth > MAX_NESTING {
        return Err(Arc4Error::unknown_type(s, "nesting too deep"));
    }

    if let Some(head) = s.strip_suffix(']') {
        let open = head
            .rfind('[')
            .ok_or_else(|| Arc4Error::unknown_type(s, "unmatched `]`"))?;
        let elem = parse_with_depth(&head[..open], depth + 1)?;
        let len = &head[open + 1..];
        if len.is_empty() {
            return Ok(AbiType::DynamicArray(Box::new(elem)));
        }
        return Ok(AbiType::StaticArray(Box::new(elem), parse_array_len(s, len)?));
    }

    if let Some(digits) = s.strip_prefix("uint") {
        return Ok(AbiType::Uint(parse_bit_size(s, digits)?));
    }

    if let Some(rest) = s.strip_prefix("ufixed") {
        let (bits, precision) = rest
            .split_once('x')
            .ok_or_else(|| Arc4Error::unknown_type(s, "expected ufixed<N>x<M>"))?;
        return Ok(AbiType::Ufixed(
            parse_bit_size(s, bits)?,
            parse_precision(s, precision)?,
        ));
    }

    match s {
        "byte" => return Ok(AbiType::Byte),
        "bool" => return Ok(AbiType::Bool),
        "address" => return Ok(AbiType::Address),
        "string" => return Ok(AbiType::String),
        _ => {}
    }

    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        let children = parse_tuple(inner)
            .map_err(|e| Arc4Error::unknown_type(s, e.to_string()))?
            .iter()
            .map(|child| parse_with_depth(child, depth + 1))
            .collect::<Result<Vec<AbiType>>>()?;
        return Ok(AbiType::Tuple(children));
    }

    Err(Arc4Error::unknown_type(s, "not a recognised ABI type"))
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Uint(bits) => write!(f, "uint{}", bits),
            AbiType::Ufixed(bits, precision) => write!(f, "ufixed{}x{}", bits, precision),
            AbiType::Byte => f.write_str("byte"),
            AbiType::Bool => f.write_str("bool"),
            AbiType::Address => f.write_str("address"),
            AbiType::String => f.write_str("string"),
            AbiType::StaticArray(elem, len) => write!(f, "{}[{}]", elem, len),
            AbiType::DynamicArray(elem) => write!(f, "{}[]", elem),
            AbiType::Tuple(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Split a comma-joined type list on top-level commas.
///
/// Commas nested inside parentheses stay with their component, so
/// `"uint64,(bool,byte),string"` yields three components.
///
/// # Errors
///
/// - `UnknownType` — a component is empty (leading, trailing or doubled comma)
/// - `MalformedSignature` — parentheses do not balance
pub fn parse_tuple(s: &str) -> Result<Vec<String>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let mut components = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Arc4Error::MalformedSignature {
                        signature: s.to_string(),
                    })?;
            }
            ',' if depth == 0 => {
                components.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Arc4Error::MalformedSignature {
            signature: s.to_string(),
        });
    }
    components.push(&s[start..]);

    if components.iter().any(|c| c.is_empty()) {
        return Err(Arc4Error::unknown_type(s, "empty component in type list"));
    }
    Ok(components.into_iter().map(str::to_string).collect())
}

/// Argument marker meaning "this argument is an additional transaction"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Any transaction type
    Any,
    Payment,
    KeyRegistration,
    AssetConfig,
    AssetTransfer,
    AssetFreeze,
    ApplicationCall,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Any => "txn",
            TransactionType::Payment => "pay",
            TransactionType::KeyRegistration => "keyreg",
            TransactionType::AssetConfig => "acfg",
            TransactionType::AssetTransfer => "axfer",
            TransactionType::AssetFreeze => "afrz",
            TransactionType::ApplicationCall => "appl",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txn" => Ok(TransactionType::Any),
            "pay" => Ok(TransactionType::Payment),
            "keyreg" => Ok(TransactionType::KeyRegistration),
            "acfg" => Ok(TransactionType::AssetConfig),
            "axfer" => Ok(TransactionType::AssetTransfer),
            "afrz" => Ok(TransactionType::AssetFreeze),
            "appl" => Ok(TransactionType::ApplicationCall),
            _ => Err(Arc4Error::unknown_type(s, "not a transaction type")),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument marker meaning "this argument references a foreign array entry"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    Account,
    Application,
    Asset,
}

impl ReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::Account => "account",
            ReferenceType::Application => "application",
            ReferenceType::Asset => "asset",
        }
    }
}

impl FromStr for ReferenceType {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "account" => Ok(ReferenceType::Account),
            "application" => Ok(ReferenceType::Application),
            "asset" => Ok(ReferenceType::Asset),
            _ => Err(Arc4Error::unknown_type(s, "not a reference type")),
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
