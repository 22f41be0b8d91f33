//! C# runtime bindings for declared field types.
//!
//! A [`CodecBinding`] ties a declared type to the C# type that stores it and
//! to the `pb::CodedInputStream` / `pb::CodedOutputStream` / `pb::FieldCodec`
//! members that read, write and size it.
//!
//! # Type Mappings
//!
//! | Declared | C# type | Codec suffix | Default |
//! |----------|---------|--------------|---------|
//! | `double` | `double` | `Double` | `0D` |
//! | `float` | `float` | `Float` | `0F` |
//! | `int64` / `sint64` / `sfixed64` | `long` | `Int64` / `SInt64` / `SFixed64` | `0L` |
//! | `uint64` / `fixed64` | `ulong` | `UInt64` / `Fixed64` | `0UL` |
//! | `int32` / `sint32` / `sfixed32` | `int` | `Int32` / `SInt32` / `SFixed32` | `0` |
//! | `uint32` / `fixed32` | `uint` | `UInt32` / `Fixed32` | `0` |
//! | `bool` | `bool` | `Bool` | `false` |
//! | `string` | `string` | `String` | `""` |
//! | `bytes` | `pb::ByteString` | `Bytes` | `pb::ByteString.Empty` |
//! | `enum` | resolved name | `Enum` | `(T) 0` |
//! | `message` / `group` | resolved name | `Message` / `Group` | `null` |

use fieldgen_core::{FieldRef, FieldType, GenerationError, GenerationResult};
use fieldgen_wire::Tag;

/// Read/write/size primitives for one declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecBinding {
    field_type: FieldType,
    type_name: String,
}

impl CodecBinding {
    /// Bind `field_type`; message, group and enum types need their resolved name
    pub fn new(
        field_type: FieldType,
        type_name: Option<&str>,
        field: &FieldRef,
    ) -> GenerationResult<Self> {
        let type_name = match (builtin_type_name(field_type), type_name) {
            (Some(builtin), _) => builtin.to_string(),
            (None, Some(resolved)) if !resolved.is_empty() => resolved.to_string(),
            (None, _) => {
                return Err(GenerationError::MissingTypeName {
                    field: field.clone(),
                    field_type,
                });
            }
        };
        Ok(Self {
            field_type,
            type_name,
        })
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// C# type of one value
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Suffix of the `pb::FieldCodec.For*` factory and the stream methods
    pub fn capitalized_type_name(&self) -> &'static str {
        match self.field_type {
            FieldType::Double => "Double",
            FieldType::Float => "Float",
            FieldType::Int64 => "Int64",
            FieldType::UInt64 => "UInt64",
            FieldType::Int32 => "Int32",
            FieldType::Fixed64 => "Fixed64",
            FieldType::Fixed32 => "Fixed32",
            FieldType::Bool => "Bool",
            FieldType::String => "String",
            FieldType::Group => "Group",
            FieldType::Message => "Message",
            FieldType::Bytes => "Bytes",
            FieldType::UInt32 => "UInt32",
            FieldType::Enum => "Enum",
            FieldType::SFixed32 => "SFixed32",
            FieldType::SFixed64 => "SFixed64",
            FieldType::SInt32 => "SInt32",
            FieldType::SInt64 => "SInt64",
        }
    }

    /// Literal for the zero value of the type
    pub fn default_value(&self) -> String {
        match self.field_type {
            FieldType::Double => "0D".to_string(),
            FieldType::Float => "0F".to_string(),
            FieldType::Int64 | FieldType::SInt64 | FieldType::SFixed64 => "0L".to_string(),
            FieldType::UInt64 | FieldType::Fixed64 => "0UL".to_string(),
            FieldType::Int32
            | FieldType::SInt32
            | FieldType::SFixed32
            | FieldType::UInt32
            | FieldType::Fixed32 => "0".to_string(),
            FieldType::Bool => "false".to_string(),
            FieldType::String => "\"\"".to_string(),
            FieldType::Bytes => "pb::ByteString.Empty".to_string(),
            FieldType::Enum => format!("({}) 0", self.type_name),
            FieldType::Message | FieldType::Group => "null".to_string(),
        }
    }

    pub fn is_message(&self) -> bool {
        self.field_type.is_message()
    }

    pub fn is_group(&self) -> bool {
        self.field_type == FieldType::Group
    }

    /// `pb::FieldCodec` construction expression for values tagged with `tag`
    pub fn codec(&self, tag: Tag) -> String {
        match self.field_type {
            FieldType::Enum => format!(
                "pb::FieldCodec.ForEnum({}, x => (int) x, x => ({}) x)",
                tag.value(),
                self.type_name
            ),
            FieldType::Message => format!(
                "pb::FieldCodec.ForMessage({}, {}.Parser)",
                tag.value(),
                self.type_name
            ),
            FieldType::Group => format!(
                "pb::FieldCodec.ForGroup({}, {}, {}.Parser)",
                tag.value(),
                tag.end_group().value(),
                self.type_name
            ),
            _ => format!(
                "pb::FieldCodec.For{}({})",
                self.capitalized_type_name(),
                tag.value()
            ),
        }
    }

    /// Expression reading one value from `input`; messages are read in place instead
    pub fn read_value(&self) -> Option<String> {
        match self.field_type {
            FieldType::Message | FieldType::Group => None,
            FieldType::Enum => Some(format!("({}) input.ReadEnum()", self.type_name)),
            _ => Some(format!("input.Read{}()", self.capitalized_type_name())),
        }
    }

    /// Statement writing `value` to `output`, without the tag
    pub fn write_value(&self, value: &str) -> String {
        match self.field_type {
            FieldType::Enum => format!("output.WriteEnum((int) {value})"),
            _ => format!("output.Write{}({value})", self.capitalized_type_name()),
        }
    }

    /// Expression for the encoded length of `value`, without the tag
    pub fn value_size(&self, value: &str) -> String {
        if let Some(size) = self.field_type.fixed_size() {
            return size.to_string();
        }
        match self.field_type {
            FieldType::Enum => format!("pb::CodedOutputStream.ComputeEnumSize((int) {value})"),
            _ => format!(
                "pb::CodedOutputStream.Compute{}Size({value})",
                self.capitalized_type_name()
            ),
        }
    }

    /// Hash contribution of `value`
    pub fn hash_value(&self, value: &str) -> String {
        match bitwise_comparer(self.field_type) {
            Some(comparer) => format!("{comparer}.GetHashCode({value})"),
            None => format!("{value}.GetHashCode()"),
        }
    }

    /// Condition that holds when `left` and `right` differ
    pub fn not_equal(&self, left: &str, right: &str) -> String {
        if let Some(comparer) = bitwise_comparer(self.field_type) {
            return format!("!{comparer}.Equals({left}, {right})");
        }
        if self.is_message() {
            return format!("!object.Equals({left}, {right})");
        }
        format!("{left} != {right}")
    }

    /// Condition that holds when `value` differs from the zero value
    pub fn is_set(&self, value: &str) -> String {
        match self.field_type {
            FieldType::String | FieldType::Bytes => format!("{value}.Length != 0"),
            _ => format!("{value} != {}", self.default_value()),
        }
    }

    /// Right-hand side of a property setter
    pub fn checked_value(&self) -> &'static str {
        match self.field_type {
            FieldType::String | FieldType::Bytes => {
                "pb::ProtoPreconditions.CheckNotNull(value, \"value\")"
            }
            _ => "value",
        }
    }
}

/// Codec for one side of a map entry (`number` 1 for keys, 2 for values)
pub fn entry_codec(
    field_type: FieldType,
    type_name: Option<&str>,
    number: u32,
    field: &FieldRef,
) -> GenerationResult<String> {
    let binding = CodecBinding::new(field_type, type_name, field)?;
    let tag = Tag::new(number, field_type.wire_type()).map_err(|_| {
        GenerationError::UnsupportedType {
            field: field.clone(),
            field_type,
            reason: format!("no entry tag for field {number}"),
        }
    })?;
    Ok(binding.codec(tag))
}

fn builtin_type_name(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::Double => Some("double"),
        FieldType::Float => Some("float"),
        FieldType::Int64 | FieldType::SInt64 | FieldType::SFixed64 => Some("long"),
        FieldType::UInt64 | FieldType::Fixed64 => Some("ulong"),
        FieldType::Int32 | FieldType::SInt32 | FieldType::SFixed32 => Some("int"),
        FieldType::UInt32 | FieldType::Fixed32 => Some("uint"),
        FieldType::Bool => Some("bool"),
        FieldType::String => Some("string"),
        FieldType::Bytes => Some("pb::ByteString"),
        FieldType::Enum | FieldType::Message | FieldType::Group => None,
    }
}

fn bitwise_comparer(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::Float => Some("pbc::ProtobufEqualityComparers.BitwiseSingleEqualityComparer"),
        FieldType::Double => Some("pbc::ProtobufEqualityComparers.BitwiseDoubleEqualityComparer"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use fieldgen_core::WireType;
    use test_case::test_case;

    fn field() -> FieldRef {
        FieldRef::new("Msg", "f")
    }

    fn bind(field_type: FieldType) -> CodecBinding {
        CodecBinding::new(field_type, Some("global::Pkg.Thing"), &field()).unwrap()
    }

    #[test_case(FieldType::Double, "double", "Double", "0D")]
    #[test_case(FieldType::Float, "float", "Float", "0F")]
    #[test_case(FieldType::Int64, "long", "Int64", "0L")]
    #[test_case(FieldType::UInt64, "ulong", "UInt64", "0UL")]
    #[test_case(FieldType::Int32, "int", "Int32", "0")]
    #[test_case(FieldType::Fixed64, "ulong", "Fixed64", "0UL")]
    #[test_case(FieldType::Fixed32, "uint", "Fixed32", "0")]
    #[test_case(FieldType::Bool, "bool", "Bool", "false")]
    #[test_case(FieldType::String, "string", "String", "\"\"")]
    #[test_case(FieldType::Bytes, "pb::ByteString", "Bytes", "pb::ByteString.Empty")]
    #[test_case(FieldType::UInt32, "uint", "UInt32", "0")]
    #[test_case(FieldType::SFixed32, "int", "SFixed32", "0")]
    #[test_case(FieldType::SFixed64, "long", "SFixed64", "0L")]
    #[test_case(FieldType::SInt32, "int", "SInt32", "0")]
    #[test_case(FieldType::SInt64, "long", "SInt64", "0L")]
    #[test_case(FieldType::Enum, "global::Pkg.Thing", "Enum", "(global::Pkg.Thing) 0")]
    #[test_case(FieldType::Message, "global::Pkg.Thing", "Message", "null")]
    fn CodecBinding___maps_declared_type(
        field_type: FieldType,
        type_name: &str,
        suffix: &str,
        default: &str,
    ) {
        let binding = bind(field_type);

        assert_eq!(binding.type_name(), type_name);
        assert_eq!(binding.capitalized_type_name(), suffix);
        assert_eq!(binding.default_value(), default);
    }

    #[test]
    fn CodecBinding___builtin_ignores_resolved_name() {
        let binding = CodecBinding::new(FieldType::Int32, Some("Ignored"), &field()).unwrap();

        assert_eq!(binding.type_name(), "int");
    }

    #[test]
    fn CodecBinding___enum_without_name___missing_type_name() {
        let err = CodecBinding::new(FieldType::Enum, None, &field()).unwrap_err();

        assert!(matches!(
            err,
            GenerationError::MissingTypeName {
                field_type: FieldType::Enum,
                ..
            }
        ));
    }

    #[test]
    fn CodecBinding___message_with_empty_name___missing_type_name() {
        let result = CodecBinding::new(FieldType::Message, Some(""), &field());

        assert!(result.is_err());
    }

    #[test]
    fn CodecBinding___scalar_codec___uses_factory_suffix() {
        let tag = Tag::new(3, WireType::LengthDelimited).unwrap();

        assert_eq!(bind(FieldType::Int32).codec(tag), "pb::FieldCodec.ForInt32(26)");
    }

    #[test]
    fn CodecBinding___enum_codec___casts_through_int() {
        let tag = Tag::new(2, WireType::Varint).unwrap();

        assert_eq!(
            bind(FieldType::Enum).codec(tag),
            "pb::FieldCodec.ForEnum(16, x => (int) x, x => (global::Pkg.Thing) x)"
        );
    }

    #[test]
    fn CodecBinding___group_codec___carries_end_tag() {
        let tag = Tag::new(4, WireType::StartGroup).unwrap();

        assert_eq!(
            bind(FieldType::Group).codec(tag),
            "pb::FieldCodec.ForGroup(35, 36, global::Pkg.Thing.Parser)"
        );
    }

    #[test]
    fn CodecBinding___message___not_read_by_expression() {
        assert_eq!(bind(FieldType::Message).read_value(), None);
        assert_eq!(
            bind(FieldType::SInt64).read_value(),
            Some("input.ReadSInt64()".to_string())
        );
        assert_eq!(
            bind(FieldType::Enum).read_value(),
            Some("(global::Pkg.Thing) input.ReadEnum()".to_string())
        );
    }

    #[test]
    fn CodecBinding___fixed_width___constant_size() {
        assert_eq!(bind(FieldType::Double).value_size("X"), "8");
        assert_eq!(bind(FieldType::Fixed32).value_size("X"), "4");
        assert_eq!(bind(FieldType::Bool).value_size("X"), "1");
        assert_eq!(
            bind(FieldType::Int32).value_size("X"),
            "pb::CodedOutputStream.ComputeInt32Size(X)"
        );
    }

    #[test]
    fn CodecBinding___floating_point___compared_bitwise() {
        assert_eq!(
            bind(FieldType::Float).not_equal("A", "other.A"),
            "!pbc::ProtobufEqualityComparers.BitwiseSingleEqualityComparer.Equals(A, other.A)"
        );
        assert_eq!(
            bind(FieldType::Double).hash_value("A"),
            "pbc::ProtobufEqualityComparers.BitwiseDoubleEqualityComparer.GetHashCode(A)"
        );
        assert_eq!(bind(FieldType::Int32).not_equal("A", "other.A"), "A != other.A");
    }

    #[test]
    fn CodecBinding___string_and_bytes___null_checked() {
        assert_eq!(
            bind(FieldType::String).checked_value(),
            "pb::ProtoPreconditions.CheckNotNull(value, \"value\")"
        );
        assert_eq!(bind(FieldType::Bytes).is_set("A"), "A.Length != 0");
        assert_eq!(bind(FieldType::UInt32).checked_value(), "value");
    }

    #[test]
    fn entry_codec___key_and_value_tags() {
        let key = entry_codec(FieldType::String, None, 1, &field()).unwrap();
        let value = entry_codec(FieldType::Message, Some("global::V"), 2, &field()).unwrap();

        assert_eq!(key, "pb::FieldCodec.ForString(10)");
        assert_eq!(value, "pb::FieldCodec.ForMessage(18, global::V.Parser)");
    }
}
