//! fieldgen-core - Field schema, generation options, and error types
//!
//! This crate provides the foundational types shared by every fieldgen crate:
//! - [`FieldSchema`] the resolved description of one message field
//! - [`FieldType`] and [`WireType`] for declared types and their wire classes
//! - [`GeneratorOptions`] for emission options
//! - [`GenerationError`] for fail-fast generation errors

mod error;
mod options;
mod schema;

pub use error::{FieldRef, GenerationError, GenerationResult};
pub use options::GeneratorOptions;
pub use schema::{
    Cardinality, FieldSchema, FieldType, MAX_FIELD_NUMBER, MapEntry, OneofMembership,
    RESERVED_FIELD_NUMBERS, SourceLocation, WireType,
};

/// Log levels understood by the fieldgen tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(GenerationError::Config(format!("unknown log level: {other}"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cardinality, FieldRef, FieldSchema, FieldType, GenerationError, GenerationResult,
        GeneratorOptions, LogLevel, MapEntry, OneofMembership, SourceLocation, WireType,
    };
}
