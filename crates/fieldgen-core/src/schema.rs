//! Resolved field schema handed over by the front end
//!
//! A [`FieldSchema`] describes one field of one message after name resolution:
//! its number, declared type, cardinality and the handful of flags the code
//! generator needs. It is plain data and can be deserialized from JSON.
//!
//! # Example
//!
//! ```
//! use fieldgen_core::{Cardinality, FieldSchema, FieldType, WireType};
//!
//! let field = FieldSchema::new("samples", 3, FieldType::Int32, "Probe")
//!     .with_cardinality(Cardinality::Repeated)
//!     .with_packed(true);
//!
//! assert!(field.validate().is_ok());
//! assert_eq!(field.wire_type(), WireType::LengthDelimited);
//! ```

use crate::error::{FieldRef, GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

/// Largest field number the wire format can carry (2^29 - 1)
pub const MAX_FIELD_NUMBER: i32 = 536_870_911;

/// Field numbers reserved for the protocol implementation
pub const RESERVED_FIELD_NUMBERS: std::ops::RangeInclusive<i32> = 19_000..=19_999;

/// Wire type class, the low three bits of every tag
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    /// Numeric code placed in the low bits of a tag
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

/// Declared type of a field, as named in the schema language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Double,
    Float,
    Int64,
    UInt64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    UInt32,
    Enum,
    SFixed32,
    SFixed64,
    SInt32,
    SInt64,
}

impl FieldType {
    /// Name used in schema source
    pub fn proto_name(self) -> &'static str {
        match self {
            FieldType::Double => "double",
            FieldType::Float => "float",
            FieldType::Int64 => "int64",
            FieldType::UInt64 => "uint64",
            FieldType::Int32 => "int32",
            FieldType::Fixed64 => "fixed64",
            FieldType::Fixed32 => "fixed32",
            FieldType::Bool => "bool",
            FieldType::String => "string",
            FieldType::Group => "group",
            FieldType::Message => "message",
            FieldType::Bytes => "bytes",
            FieldType::UInt32 => "uint32",
            FieldType::Enum => "enum",
            FieldType::SFixed32 => "sfixed32",
            FieldType::SFixed64 => "sfixed64",
            FieldType::SInt32 => "sint32",
            FieldType::SInt64 => "sint64",
        }
    }

    /// Wire class of a single unpacked value
    pub fn wire_type(self) -> WireType {
        match self {
            FieldType::Int32
            | FieldType::Int64
            | FieldType::UInt32
            | FieldType::UInt64
            | FieldType::SInt32
            | FieldType::SInt64
            | FieldType::Bool
            | FieldType::Enum => WireType::Varint,
            FieldType::Fixed64 | FieldType::SFixed64 | FieldType::Double => WireType::Fixed64,
            FieldType::Fixed32 | FieldType::SFixed32 | FieldType::Float => WireType::Fixed32,
            FieldType::String | FieldType::Bytes | FieldType::Message => {
                WireType::LengthDelimited
            }
            FieldType::Group => WireType::StartGroup,
        }
    }

    /// Encoded size of one value when it does not depend on the value
    pub fn fixed_size(self) -> Option<u32> {
        match self {
            FieldType::Bool => Some(1),
            FieldType::Fixed32 | FieldType::SFixed32 | FieldType::Float => Some(4),
            FieldType::Fixed64 | FieldType::SFixed64 | FieldType::Double => Some(8),
            _ => None,
        }
    }

    /// Message-typed values: embedded messages and groups
    pub fn is_message(self) -> bool {
        matches!(self, FieldType::Message | FieldType::Group)
    }

    /// Types whose repeated form may use packed encoding
    pub fn is_packable(self) -> bool {
        !matches!(
            self,
            FieldType::String | FieldType::Bytes | FieldType::Message | FieldType::Group
        )
    }

    /// Types that name another schema entity and need a resolved type name
    pub fn needs_type_name(self) -> bool {
        matches!(self, FieldType::Message | FieldType::Group | FieldType::Enum)
    }

    /// Integral, bool and string types are the only legal map keys
    pub fn is_valid_map_key(self) -> bool {
        !matches!(
            self,
            FieldType::Double
                | FieldType::Float
                | FieldType::Bytes
                | FieldType::Message
                | FieldType::Group
                | FieldType::Enum
        )
    }

    /// Floating point types, compared bitwise by the runtime
    pub fn is_floating_point(self) -> bool {
        matches!(self, FieldType::Float | FieldType::Double)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.proto_name())
    }
}

/// How many values a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    Singular,
    Repeated,
    Map,
}

/// Key/value description of a map field's synthetic entry message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Key type (field 1 of the entry)
    pub key: FieldType,

    /// Value type (field 2 of the entry)
    pub value: FieldType,

    /// Resolved type name when the value is a message or enum
    #[serde(default)]
    pub value_type_name: Option<String>,
}

/// Membership of a field in a oneof group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneofMembership {
    /// Oneof name as written in the schema
    pub name: String,

    /// Declaration index of the oneof within its message
    #[serde(default)]
    pub index: u32,
}

/// Position of a declaration in the schema source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Resolved description of one message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name as written in the schema
    pub name: String,

    /// Field number, unique within the containing message
    pub number: i32,

    /// Declared type (element type for repeated fields)
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Singular, repeated or map
    #[serde(default)]
    pub cardinality: Cardinality,

    /// Generated class name of the containing message
    pub containing_type: String,

    /// Generated class name of the message or enum type, when the type names one
    #[serde(default)]
    pub type_name: Option<String>,

    /// Packed encoding for repeated scalars
    #[serde(default)]
    pub packed: bool,

    /// Has-bit index for singular fields with explicit presence
    #[serde(default)]
    pub presence_index: Option<u32>,

    /// Generated class name of the extended message, for extensions
    #[serde(default)]
    pub extendee: Option<String>,

    /// Entry description, for map fields
    #[serde(default)]
    pub map_entry: Option<MapEntry>,

    /// Oneof membership, if any
    #[serde(default)]
    pub oneof: Option<OneofMembership>,

    /// Explicit default, already rendered as a target-language literal
    #[serde(default)]
    pub default_value: Option<String>,

    /// Leading documentation lines
    #[serde(default)]
    pub docs: Vec<String>,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl FieldSchema {
    /// Create a singular field with no optional attributes
    pub fn new(
        name: impl Into<String>,
        number: i32,
        field_type: FieldType,
        containing_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number,
            field_type,
            cardinality: Cardinality::Singular,
            containing_type: containing_type.into(),
            type_name: None,
            packed: false,
            presence_index: None,
            extendee: None,
            map_entry: None,
            oneof: None,
            default_value: None,
            docs: Vec::new(),
            deprecated: false,
            location: None,
        }
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    pub fn with_presence_index(mut self, index: u32) -> Self {
        self.presence_index = Some(index);
        self
    }

    pub fn with_extendee(mut self, extendee: impl Into<String>) -> Self {
        self.extendee = Some(extendee.into());
        self
    }

    /// Turn this field into a map field with the given entry types
    pub fn with_map_entry(mut self, entry: MapEntry) -> Self {
        self.cardinality = Cardinality::Map;
        self.field_type = FieldType::Message;
        self.map_entry = Some(entry);
        self
    }

    pub fn with_oneof(mut self, name: impl Into<String>, index: u32) -> Self {
        self.oneof = Some(OneofMembership {
            name: name.into(),
            index,
        });
        self
    }

    pub fn with_default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }

    pub fn is_map(&self) -> bool {
        self.cardinality == Cardinality::Map
    }

    pub fn is_extension(&self) -> bool {
        self.extendee.is_some()
    }

    /// Packed only takes effect on repeated packable types
    pub fn is_packed(&self) -> bool {
        self.packed && self.is_repeated() && self.field_type.is_packable()
    }

    /// Wire class used in this field's tag
    pub fn wire_type(&self) -> WireType {
        if self.is_packed() || self.is_map() {
            WireType::LengthDelimited
        } else {
            self.field_type.wire_type()
        }
    }

    /// Reference used in diagnostics
    pub fn field_ref(&self) -> FieldRef {
        let scope = self
            .extendee
            .as_deref()
            .filter(|_| self.containing_type.is_empty())
            .unwrap_or(&self.containing_type);
        let field = FieldRef::new(scope, &self.name);
        match &self.location {
            Some(location) => field.with_location(location.clone()),
            None => field,
        }
    }

    /// Check the invariants the code generator relies on.
    ///
    /// This is not schema validation: it only rejects shapes no generator
    /// variant could emit correct code for.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.number <= 0
            || self.number > MAX_FIELD_NUMBER
            || RESERVED_FIELD_NUMBERS.contains(&self.number)
        {
            return Err(GenerationError::InvalidFieldNumber {
                field: self.field_ref(),
                number: self.number,
            });
        }

        if self.is_map() {
            return self.validate_map_entry();
        }

        if self.field_type.needs_type_name() && self.type_name.is_none() {
            return Err(GenerationError::MissingTypeName {
                field: self.field_ref(),
                field_type: self.field_type,
            });
        }

        if self.packed && self.is_repeated() && !self.field_type.is_packable() {
            return Err(self.unsupported(
                self.field_type,
                format!("{} fields cannot be packed", self.field_type),
            ));
        }

        if self.oneof.is_some() && self.cardinality != Cardinality::Singular {
            return Err(self.unsupported(
                self.field_type,
                "oneof members must be singular".to_string(),
            ));
        }

        if self.oneof.is_some() && self.is_extension() {
            return Err(self.unsupported(
                self.field_type,
                "extensions cannot be oneof members".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_map_entry(&self) -> GenerationResult<()> {
        let Some(entry) = &self.map_entry else {
            return Err(GenerationError::MissingMapEntry {
                field: self.field_ref(),
            });
        };

        if !entry.key.is_valid_map_key() {
            return Err(self.unsupported(
                entry.key,
                format!("{} cannot be used as a map key", entry.key),
            ));
        }

        if entry.value == FieldType::Group {
            return Err(self.unsupported(
                entry.value,
                "groups cannot be map values".to_string(),
            ));
        }

        if entry.value.needs_type_name() && entry.value_type_name.is_none() {
            return Err(GenerationError::MissingTypeName {
                field: self.field_ref(),
                field_type: entry.value,
            });
        }

        if self.oneof.is_some() || self.is_extension() {
            return Err(self.unsupported(
                FieldType::Message,
                "map fields cannot be oneof members or extensions".to_string(),
            ));
        }

        Ok(())
    }

    fn unsupported(&self, field_type: FieldType, reason: String) -> GenerationError {
        GenerationError::UnsupportedType {
            field: self.field_ref(),
            field_type,
            reason,
        }
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
