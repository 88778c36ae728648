use thiserror::Error;

/// Result type alias using Arc4Error
pub type Result<T> = std::result::Result<T, Arc4Error>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Parsing
    MalformedSignature,
    UnknownType,

    // Lookup
    AmbiguousMethodName,
    MethodNotFound,

    // Diff
    TypeShapeMismatch,

    // Generic map decoding
    MissingField,
    InvalidField,
    Serialization,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MalformedSignature => "ERR_MALFORMED_SIGNATURE",
            ErrorKind::UnknownType => "ERR_UNKNOWN_TYPE",
            ErrorKind::AmbiguousMethodName => "ERR_AMBIGUOUS_METHOD_NAME",
            ErrorKind::MethodNotFound => "ERR_METHOD_NOT_FOUND",
            ErrorKind::TypeShapeMismatch => "ERR_TYPE_SHAPE_MISMATCH",
            ErrorKind::MissingField => "ERR_MISSING_FIELD",
            ErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification fields used for programmatic handling and the
/// context (operation, entity, candidates) used when reporting to a human.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ErrorKind,
    op: Option<String>,
    entity: Option<String>,
    message: String,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a method name, contract name or type string)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add candidate signatures (populated on AmbiguousMethodName)
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(candidates) = &self.candidates {
            write!(f, " (candidates: {})", candidates.join(","))?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for contract description operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Arc4Error {
    /// Method signature has unmatched or absent outer parentheses
    #[error("ABI method string has mismatched parentheses: {signature}")]
    MalformedSignature { signature: String },

    /// Type string is neither a transaction/reference marker nor a valid ABI type
    #[error("unknown ABI type `{type_str}`: {reason}")]
    UnknownType { type_str: String, reason: String },

    /// More than one method matches a lookup by name
    #[error("found {} methods with the same name {name}: {}", signatures.len(), signatures.join(","))]
    AmbiguousMethodName {
        name: String,
        signatures: Vec<String>,
    },

    /// No method matches a lookup by name
    #[error("found 0 methods for {name}")]
    MethodNotFound { name: String },

    /// Two generic values of incompatible shapes were diffed
    #[error("cannot diff a {left} with a {right}")]
    TypeShapeMismatch { left: String, right: String },

    /// A required key is absent from a decoded map
    #[error("{entity} is missing required field `{field}`")]
    MissingField { entity: String, field: String },

    /// A key is present but holds a value of the wrong shape
    #[error("{entity} field `{field}` is invalid: {reason}")]
    InvalidField {
        entity: String,
        field: String,
        reason: String,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Arc4Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Arc4Error::MalformedSignature { .. } => ErrorKind::MalformedSignature,
            Arc4Error::UnknownType { .. } => ErrorKind::UnknownType,
            Arc4Error::AmbiguousMethodName { .. } => ErrorKind::AmbiguousMethodName,
            Arc4Error::MethodNotFound { .. } => ErrorKind::MethodNotFound,
            Arc4Error::TypeShapeMismatch { .. } => ErrorKind::TypeShapeMismatch,
            Arc4Error::MissingField { .. } => ErrorKind::MissingField,
            Arc4Error::InvalidField { .. } => ErrorKind::InvalidField,
            Arc4Error::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    pub(crate) fn unknown_type(type_str: &str, reason: impl Into<String>) -> Self {
        Arc4Error::UnknownType {
            type_str: type_str.to_string(),
            reason: reason.into(),
        }
    }
}

/// Conversion from Arc4Error to ExError
impl From<Arc4Error> for ExError {
    fn from(err: Arc4Error) -> Self {
        let message = err.to_string();
        match err {
            Arc4Error::MalformedSignature { signature } => {
                ExError::new(ErrorKind::MalformedSignature)
                    .with_entity(signature)
                    .with_message(message)
            }
            Arc4Error::UnknownType { type_str, .. } => ExError::new(ErrorKind::UnknownType)
                .with_entity(type_str)
                .with_message(message),
            Arc4Error::AmbiguousMethodName { name, signatures } => {
                ExError::new(ErrorKind::AmbiguousMethodName)
                    .with_op("get_method_by_name")
                    .with_entity(name)
                    .with_candidates(signatures)
                    .with_message(message)
            }
            Arc4Error::MethodNotFound { name } => ExError::new(ErrorKind::MethodNotFound)
                .with_op("get_method_by_name")
                .with_entity(name)
                .with_message(message),
            Arc4Error::TypeShapeMismatch { .. } => ExError::new(ErrorKind::TypeShapeMismatch)
                .with_op("diff_values")
                .with_message(message),
            Arc4Error::MissingField { entity, .. } => ExError::new(ErrorKind::MissingField)
                .with_op("undictify")
                .with_entity(entity)
                .with_message(message),
            Arc4Error::InvalidField { entity, .. } => ExError::new(ErrorKind::InvalidField)
                .with_op("undictify")
                .with_entity(entity)
                .with_message(message),
            Arc4Error::Serialization { .. } => {
                ExError::new(ErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to Arc4Error
impl From<serde_json::Error> for Arc4Error {
    fn from(err: serde_json::Error) -> Self {
        Arc4Error::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ErrorKind::MalformedSignature, "ERR_MALFORMED_SIGNATURE"),
            (ErrorKind::UnknownType, "ERR_UNKNOWN_TYPE"),
            (ErrorKind::AmbiguousMethodName, "ERR_AMBIGUOUS_METHOD_NAME"),
            (ErrorKind::MethodNotFound, "ERR_METHOD_NOT_FOUND"),
            (ErrorKind::TypeShapeMismatch, "ERR_TYPE_SHAPE_MISMATCH"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_ex_error_candidates_none_by_default() {
        let err = ExError::new(ErrorKind::MethodNotFound);
        assert!(err.candidates().is_none());
    }

    #[test]
    fn test_ambiguous_conversion_carries_candidates() {
        let err = Arc4Error::AmbiguousMethodName {
            name: "f".to_string(),
            signatures: vec!["f(uint64)void".into(), "f(string)void".into()],
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ErrorKind::AmbiguousMethodName);
        assert_eq!(ex.entity(), Some("f"));
        assert_eq!(ex.candidates().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_field_errors_keep_their_kind() {
        let missing: ExError = Arc4Error::MissingField {
            entity: "Method".into(),
            field: "name".into(),
        }
        .into();
        let invalid: ExError = Arc4Error::InvalidField {
            entity: "Method".into(),
            field: "name".into(),
            reason: "expected a string".into(),
        }
        .into();
        assert_eq!(missing.kind(), ErrorKind::MissingField);
        assert_eq!(invalid.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let ex: ExError = Arc4Error::MethodNotFound { name: "g".into() }.into();
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_METHOD_NOT_FOUND]"));
        assert!(rendered.contains("found 0 methods for g"));
    }
}
