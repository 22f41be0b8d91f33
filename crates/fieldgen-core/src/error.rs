//! Error types for field code generation

use crate::schema::{FieldType, SourceLocation};
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Identifies the field an error was raised for.
///
/// Rendered as `Message.field` followed by the schema location when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    /// Containing message (or extension scope) name
    pub message: String,
    /// Field name as written in the schema
    pub field: String,
    /// Where the field was declared, if the front end recorded it
    pub location: Option<SourceLocation>,
}

impl FieldRef {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.message, self.field)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

/// Error type for generation-time failures.
///
/// Every variant is fatal: generation stops at the first one and the error is
/// handed back to the orchestrator.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Field number is zero, too large, or inside the reserved range
    #[error("{field}: invalid field number {number}")]
    InvalidFieldNumber { field: FieldRef, number: i32 },

    /// Declared type has no codec for the way the field uses it
    #[error("{field}: unsupported type {field_type}: {reason}")]
    UnsupportedType {
        field: FieldRef,
        field_type: FieldType,
        reason: String,
    },

    /// Message, group, or enum field without a resolved type name
    #[error("{field}: {field_type} field has no resolved type name")]
    MissingTypeName { field: FieldRef, field_type: FieldType },

    /// Map field without key/value entry types
    #[error("{field}: map field has no entry types")]
    MissingMapEntry { field: FieldRef },

    /// Extension generation requested for a field with no extension target
    #[error("{field}: field does not extend any message")]
    MissingExtendee { field: FieldRef },

    /// A template referenced a variable the context does not define
    #[error("{field}: template references unknown variable `{variable}`")]
    MissingVariable { field: FieldRef, variable: String },

    /// A template has an unterminated `$` delimiter
    #[error("malformed template at byte {offset}: {template:?}")]
    MalformedTemplate { template: String, offset: usize },

    /// Options could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerationError {
    /// Returns a stable numeric code for reporting
    pub fn error_code(&self) -> u32 {
        match self {
            GenerationError::InvalidFieldNumber { .. } => 1,
            GenerationError::UnsupportedType { .. } => 2,
            GenerationError::MissingTypeName { .. } => 3,
            GenerationError::MissingMapEntry { .. } => 4,
            GenerationError::MissingExtendee { .. } => 5,
            GenerationError::MissingVariable { .. } => 6,
            GenerationError::MalformedTemplate { .. } => 7,
            GenerationError::Config(_) => 8,
        }
    }

    /// The field the error concerns, when it concerns one
    pub fn field(&self) -> Option<&FieldRef> {
        match self {
            GenerationError::InvalidFieldNumber { field, .. }
            | GenerationError::UnsupportedType { field, .. }
            | GenerationError::MissingTypeName { field, .. }
            | GenerationError::MissingMapEntry { field }
            | GenerationError::MissingExtendee { field }
            | GenerationError::MissingVariable { field, .. } => Some(field),
            GenerationError::MalformedTemplate { .. } | GenerationError::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for GenerationError {
    fn from(err: toml::de::Error) -> Self {
        GenerationError::Config(err.to_string())
    }
}


#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
