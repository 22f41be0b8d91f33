//! Generation options

use crate::LogLevel;
use crate::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

/// Options controlling how field fragments are emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Emit `internal` instead of `public` accessors and extensions
    #[serde(default)]
    pub internal_access: bool,

    /// Attribute placed on generated storage declarations
    ///
    /// Hosts that inspect object fields by reflection (Unity's
    /// `UnityEngine.SerializeField`, for example) need their marker on every
    /// backing field. Left unset, no attribute is emitted.
    #[serde(default)]
    pub storage_attribute: Option<String>,

    /// Emit `/// <summary>` comments from schema documentation
    #[serde(default = "default_emit_doc_comments")]
    pub emit_doc_comments: bool,

    /// Log level for the command line tools
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_emit_doc_comments() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            internal_access: false,
            storage_attribute: None,
            emit_doc_comments: default_emit_doc_comments(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from JSON bytes; empty input yields defaults
    pub fn from_json(bytes: &[u8]) -> GenerationResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load options from TOML text; blank input yields defaults
    pub fn from_toml(text: &str) -> GenerationResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(text)?)
    }

    pub fn with_internal_access(mut self, internal: bool) -> Self {
        self.internal_access = internal;
        self
    }

    pub fn with_storage_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.storage_attribute = Some(attribute.into());
        self
    }

    pub fn with_doc_comments(mut self, emit: bool) -> Self {
        self.emit_doc_comments = emit;
        self
    }

    /// Access modifier for generated public members
    pub fn access_level(&self) -> &'static str {
        if self.internal_access {
            "internal"
        } else {
            "public"
        }
    }

    /// Parsed log level
    pub fn log_level(&self) -> GenerationResult<LogLevel> {
        self.log_level.parse()
    }

    /// Storage attribute with surrounding brackets stripped
    pub fn storage_attribute(&self) -> Option<&str> {
        self.storage_attribute
            .as_deref()
            .map(|attr| attr.trim().trim_start_matches('[').trim_end_matches(']').trim())
            .filter(|attr| !attr.is_empty())
    }

    /// Reject option combinations the generator cannot honor
    pub fn validate(&self) -> GenerationResult<()> {
        self.log_level()?;
        if let Some(attr) = self.storage_attribute()
            && attr.contains(['\n', '$'])
        {
            return Err(GenerationError::Config(format!(
                "storage attribute must be a single attribute expression: {attr:?}"
            )));
        }
        Ok(())
    }
}
