use serde_json::Value;
use thiserror::Error;

/// A wire value that does not decode into a Block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    #[error("Invalid JSON: unknown node kind in {value}")]
    UnknownKind { value: Value },

    #[error("Invalid JSON: {kind} is missing field `{field}` in {value}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
        value: Value,
    },

    #[error("Invalid JSON: {kind}.{field} must be {expected} in {value}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
        value: Value,
    },

    #[error("Invalid JSON: expected {expected}, found {found} in {value}")]
    WrongCategory {
        expected: &'static str,
        found: &'static str,
        value: Value,
    },

    #[error("Invalid JSON: {kind} repeats name `{name}` in {value}")]
    DuplicateName {
        kind: &'static str,
        name: String,
        value: Value,
    },
}

impl FormatError {
    /// The raw value that failed to decode, when the input was valid JSON.
    pub fn value(&self) -> Option<&Value> {
        match self {
            FormatError::Syntax(_) => None,
            FormatError::UnknownKind { value }
            | FormatError::MissingField { value, .. }
            | FormatError::InvalidField { value, .. }
            | FormatError::WrongCategory { value, .. }
            | FormatError::DuplicateName { value, .. } => Some(value),
        }
    }
}

/// A binding descriptor that does not have the required shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("No {0} argument")]
    MissingField(&'static str),

    #[error("Malformed {field} argument: {reason}")]
    Malformed { field: &'static str, reason: String },
}
