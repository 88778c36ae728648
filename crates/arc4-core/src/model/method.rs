use crate::abi_type::parse_tuple;
use crate::errors::{Arc4Error, Result};
use crate::model::{
    as_object, non_empty, optional_str, required, required_array, required_str, Argument,
    Dictify, Format, Returns,
};
use crate::selector::Selector;
use crate::signature::tokenize;
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::{Map, Value};

/// A callable method of a contract
///
/// `txn_calls` is derived from `args` at construction: one for the call
/// itself plus one per transaction-typed argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    name: String,
    args: Vec<Argument>,
    returns: Returns,
    desc: Option<String>,
    txn_calls: usize,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        args: Vec<Argument>,
        returns: Returns,
        desc: Option<String>,
    ) -> Self {
        let txn_calls = 1 + args
            .iter()
            .filter(|arg| arg.arg_type().is_transaction())
            .count();
        Self {
            name: name.into(),
            args,
            returns,
            desc: non_empty(desc),
            txn_calls,
        }
    }

    /// Parse a method from its signature string, e.g. `"add(uint64,uint64)uint128"`.
    ///
    /// Arguments carry no name or description.
    ///
    /// # Errors
    ///
    /// - `MalformedSignature` — parentheses do not delimit an argument list
    /// - `UnknownType` — an argument or return type does not parse
    pub fn from_signature(signature: &str) -> Result<Self> {
        log_op_start!("method_from_signature", signature = signature);
        let start = std::time::Instant::now();

        let result = Self::from_signature_impl(signature).map_err(|e| {
            log_op_error!(
                "method_from_signature",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "method_from_signature",
            duration_ms = start.elapsed().as_millis() as u64,
            method = result.name()
        );
        Ok(result)
    }

    fn from_signature_impl(signature: &str) -> Result<Self> {
        let tokens = tokenize(signature)?;
        let args = parse_tuple(tokens.args)?
            .iter()
            .map(|t| Argument::new(t, None, None))
            .collect::<Result<Vec<_>>>()?;
        let returns = Returns::new(tokens.returns, None)?;
        Ok(Self::new(tokens.name, args, returns, None))
    }

    /// Parse a method from its JSON description
    ///
    /// # Errors
    ///
    /// `Serialization` for invalid JSON, otherwise as [`Dictify::undictify`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::undictify(&value)
    }

    /// Serialize to JSON text in the given format
    ///
    /// # Errors
    ///
    /// `Serialization` if the JSON encoder fails.
    pub fn to_json(&self, format: Format) -> Result<String> {
        Ok(serde_json::to_string(&self.dictify(format))?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    pub fn returns(&self) -> &Returns {
        &self.returns
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Number of transactions needed to invoke this method
    pub fn txn_calls(&self) -> usize {
        self.txn_calls
    }

    /// Canonical signature: `name(argtype,...)rettype`
    pub fn signature(&self) -> String {
        let args: Vec<String> = self.args.iter().map(|a| a.arg_type().to_string()).collect();
        format!("{}({}){}", self.name, args.join(","), self.returns.return_type())
    }

    pub fn selector(&self) -> Selector {
        Selector::from_signature(&self.signature())
    }

    /// Ordering key used by canonical contract serialization
    pub(crate) fn canonical_key(&self) -> (&str, Vec<String>) {
        (
            self.name.as_str(),
            self.args.iter().map(|a| a.arg_type().to_string()).collect(),
        )
    }
}

impl Dictify for Method {
    fn dictify(&self, format: Format) -> Value {
        let args = Value::Array(self.args.iter().map(|a| a.dictify(format)).collect());
        let returns = self.returns.dictify(format);
        let desc = self.desc.clone().map(Value::String);

        let mut d = Map::new();
        d.insert("name".into(), Value::String(self.name.clone()));
        match format {
            Format::Standard => {
                d.insert("args".into(), args);
                d.insert("returns".into(), returns);
                if let Some(desc) = desc {
                    d.insert("desc".into(), desc);
                }
            }
            Format::Canonical => {
                if let Some(desc) = desc {
                    d.insert("desc".into(), desc);
                }
                d.insert("args".into(), args);
                d.insert("returns".into(), returns);
            }
        }
        Value::Object(d)
    }

    fn undictify(value: &Value) -> Result<Self> {
        let d = as_object(value, "Method")?;
        let name = required_str(d, "Method", "name")?;
        let args = required_array(d, "Method", "args")?
            .iter()
            .map(Argument::undictify)
            .collect::<Result<Vec<_>>>()?;
        let returns = Returns::undictify(required(d, "Method", "returns")?)?;
        let desc = optional_str(d, "Method", "desc")?;
        Ok(Method::new(name, args, returns, desc))
    }
}

/// Find the single method called `name`.
///
/// # Errors
///
/// - `AmbiguousMethodName` — several methods share the name; carries all their signatures
/// - `MethodNotFound` — no method has the name
pub fn get_method_by_name<'a>(methods: &'a [Method], name: &str) -> Result<&'a Method> {
    let matching: Vec<&Method> = methods.iter().filter(|m| m.name == name).collect();
    match matching.as_slice() {
        [] => Err(Arc4Error::MethodNotFound {
            name: name.to_string(),
        }),
        [method] => Ok(method),
        _ => Err(Arc4Error::AmbiguousMethodName {
            name: name.to_string(),
            signatures: matching.iter().map(|m| m.signature()).collect(),
        }),
    }
}
