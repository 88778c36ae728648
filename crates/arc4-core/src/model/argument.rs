use crate::abi_type::{AbiType, ReferenceType, TransactionType};
use crate::errors::{Arc4Error, Result};
use crate::model::{as_object, non_empty, optional_str, required_str, Dictify, Format};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Type of a method argument
///
/// Besides plain ABI value types, an argument may stand for an extra
/// transaction in the group or for a reference into a foreign array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgType {
    Transaction(TransactionType),
    Reference(ReferenceType),
    Value(AbiType),
}

impl ArgType {
    pub fn is_transaction(&self) -> bool {
        matches!(self, ArgType::Transaction(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, ArgType::Reference(_))
    }
}

impl FromStr for ArgType {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(txn) = s.parse::<TransactionType>() {
            return Ok(ArgType::Transaction(txn));
        }
        if let Ok(reference) = s.parse::<ReferenceType>() {
            return Ok(ArgType::Reference(reference));
        }
        s.parse::<AbiType>().map(ArgType::Value)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::Transaction(t) => fmt::Display::fmt(t, f),
            ArgType::Reference(r) => fmt::Display::fmt(r, f),
            ArgType::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// A single method argument
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    arg_type: ArgType,
    name: Option<String>,
    desc: Option<String>,
}

impl Argument {
    /// Build an argument from its type string
    ///
    /// # Errors
    ///
    /// `UnknownType` if `arg_type` is neither a transaction marker, a
    /// reference marker, nor a valid ABI type.
    pub fn new(arg_type: &str, name: Option<String>, desc: Option<String>) -> Result<Self> {
        Ok(Self::with_type(arg_type.parse()?, name, desc))
    }

    /// Build an argument from an already parsed type
    pub fn with_type(arg_type: ArgType, name: Option<String>, desc: Option<String>) -> Self {
        Self {
            arg_type,
            name: non_empty(name),
            desc: non_empty(desc),
        }
    }

    pub fn arg_type(&self) -> &ArgType {
        &self.arg_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.arg_type, f)
    }
}

impl Dictify for Argument {
    fn dictify(&self, _format: Format) -> Value {
        let mut d = Map::new();
        d.insert("type".into(), Value::String(self.arg_type.to_string()));
        if let Some(name) = &self.name {
            d.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(desc) = &self.desc {
            d.insert("desc".into(), Value::String(desc.clone()));
        }
        Value::Object(d)
    }

    fn undictify(value: &Value) -> Result<Self> {
        let d = as_object(value, "Argument")?;
        Argument::new(
            required_str(d, "Argument", "type")?,
            optional_str(d, "Argument", "name")?,
            optional_str(d, "Argument", "desc")?,
        )
    }
}

/// Return type of a method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Void,
    Value(AbiType),
}

impl ReturnType {
    pub const VOID: &'static str = "void";
}

impl FromStr for ReturnType {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == Self::VOID {
            return Ok(ReturnType::Void);
        }
        s.parse::<AbiType>().map(ReturnType::Value)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Void => f.write_str(Self::VOID),
            ReturnType::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// The return value description of a method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Returns {
    return_type: ReturnType,
    desc: Option<String>,
}

impl Returns {
    /// Build a return description from its type string (`"void"` or an ABI type)
    ///
    /// # Errors
    ///
    /// `UnknownType` if `return_type` is neither `"void"` nor a valid ABI type.
    pub fn new(return_type: &str, desc: Option<String>) -> Result<Self> {
        Ok(Self::with_type(return_type.parse()?, desc))
    }

    pub fn with_type(return_type: ReturnType, desc: Option<String>) -> Self {
        Self {
            return_type,
            desc: non_empty(desc),
        }
    }

    pub fn void() -> Self {
        Self::with_type(ReturnType::Void, None)
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn is_void(&self) -> bool {
        self.return_type == ReturnType::Void
    }
}

impl fmt::Display for Returns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.return_type, f)
    }
}

impl Dictify for Returns {
    fn dictify(&self, _format: Format) -> Value {
        let mut d = Map::new();
        d.insert("type".into(), Value::String(self.return_type.to_string()));
        if let Some(desc) = &self.desc {
            d.insert("desc".into(), Value::String(desc.clone()));
        }
        Value::Object(d)
    }

    fn undictify(value: &Value) -> Result<Self> {
        let d = as_object(value, "Returns")?;
        Returns::new(
            required_str(d, "Returns", "type")?,
            optional_str(d, "Returns", "desc")?,
        )
    }
}
