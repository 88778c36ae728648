use crate::errors::{Arc4Error, Result};
use crate::model::{
    as_object, get_method_by_name, optional_str, required_array, required_str, required_u64,
    Dictify, Format, Method,
};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Deployment of a contract on one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkInfo {
    app_id: u64,
}

impl NetworkInfo {
    pub fn new(app_id: u64) -> Self {
        Self { app_id }
    }

    pub fn app_id(&self) -> u64 {
        self.app_id
    }
}

impl Dictify for NetworkInfo {
    fn dictify(&self, _format: Format) -> Value {
        let mut d = Map::new();
        d.insert("appID".into(), Value::from(self.app_id));
        Value::Object(d)
    }

    fn undictify(value: &Value) -> Result<Self> {
        let d = as_object(value, "NetworkInfo")?;
        Ok(NetworkInfo::new(required_u64(d, "NetworkInfo", "appID")?))
    }
}

/// A named group of methods, with its deployments keyed by network id
///
/// Method names need not be unique. Lookups by name report ambiguity
/// instead of picking one of the overloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    name: String,
    methods: Vec<Method>,
    desc: Option<String>,
    networks: BTreeMap<String, NetworkInfo>,
}

impl Contract {
    pub fn new(
        name: impl Into<String>,
        methods: Vec<Method>,
        desc: Option<String>,
        networks: BTreeMap<String, NetworkInfo>,
    ) -> Self {
        Self {
            name: name.into(),
            methods,
            desc,
            networks,
        }
    }

    /// Parse a contract from its JSON description
    ///
    /// # Errors
    ///
    /// - `Serialization` — the text is not valid JSON
    /// - `MissingField` / `InvalidField` — the document does not have the contract shape
    /// - `UnknownType` — a method argument or return type does not parse
    pub fn from_json(json: &str) -> Result<Self> {
        log_op_start!("contract_from_json");
        let start = std::time::Instant::now();

        let result = serde_json::from_str::<Value>(json)
            .map_err(Arc4Error::from)
            .and_then(|value| Self::undictify(&value))
            .map_err(|e| {
                log_op_error!(
                    "contract_from_json",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            "contract_from_json",
            duration_ms = start.elapsed().as_millis() as u64,
            contract = result.name(),
            method_count = result.methods().len(),
            network_count = result.networks().len()
        );
        Ok(result)
    }

    /// Serialize to JSON text in the given format
    ///
    /// # Errors
    ///
    /// `Serialization` if the JSON encoder fails.
    pub fn to_json(&self, format: Format) -> Result<String> {
        Ok(serde_json::to_string(&self.dictify(format))?)
    }

    /// Serialize to indented JSON text in the given format
    ///
    /// # Errors
    ///
    /// `Serialization` if the JSON encoder fails.
    pub fn to_json_pretty(&self, format: Format) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.dictify(format))?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkInfo> {
        &self.networks
    }

    /// Find the single method called `name`.
    ///
    /// # Errors
    ///
    /// `AmbiguousMethodName` or `MethodNotFound`, see [`get_method_by_name`].
    pub fn get_method_by_name(&self, name: &str) -> Result<&Method> {
        get_method_by_name(&self.methods, name)
    }

    /// Whether two or more methods share a name
    pub fn has_overloaded_methods(&self) -> bool {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for method in &self.methods {
            *counts.entry(method.name()).or_default() += 1;
        }
        counts.values().any(|&n| n > 1)
    }

    /// Methods ordered by name, then by argument type strings
    pub fn canonical_methods(&self) -> Vec<&Method> {
        let mut methods: Vec<&Method> = self.methods.iter().collect();
        methods.sort_by(|a, b| a.canonical_key().cmp(&b.canonical_key()));
        methods
    }
}

impl Dictify for Contract {
    fn dictify(&self, format: Format) -> Value {
        let networks: Map<String, Value> = self
            .networks
            .iter()
            .map(|(id, info)| (id.clone(), info.dictify(format)))
            .collect();
        let desc = self.desc.clone().map(Value::String);

        let mut d = Map::new();
        d.insert("name".into(), Value::String(self.name.clone()));
        match format {
            Format::Standard => {
                let methods = self.methods.iter().map(|m| m.dictify(format)).collect();
                d.insert("methods".into(), Value::Array(methods));
                d.insert("networks".into(), Value::Object(networks));
                if let Some(desc) = desc {
                    d.insert("desc".into(), desc);
                }
            }
            Format::Canonical => {
                let methods = self
                    .canonical_methods()
                    .into_iter()
                    .map(|m| m.dictify(format))
                    .collect();
                if let Some(desc) = desc {
                    d.insert("desc".into(), desc);
                }
                d.insert("methods".into(), Value::Array(methods));
                d.insert("networks".into(), Value::Object(networks));
            }
        }
        Value::Object(d)
    }

    fn undictify(value: &Value) -> Result<Self> {
        let d = as_object(value, "Contract")?;
        let name = required_str(d, "Contract", "name")?;
        let methods = required_array(d, "Contract", "methods")?
            .iter()
            .map(Method::undictify)
            .collect::<Result<Vec<_>>>()?;
        let desc = optional_str(d, "Contract", "desc")?;
        let networks = match d.get("networks") {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(v) => as_object(v, "Contract.networks")?
                .iter()
                .map(|(id, info)| Ok((id.clone(), NetworkInfo::undictify(info)?)))
                .collect::<Result<BTreeMap<_, _>>>()?,
        };
        Ok(Contract::new(name, methods, desc, networks))
    }
}
