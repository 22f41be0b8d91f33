#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn scalar(number: i32) -> FieldSchema {
    FieldSchema::new("value", number, FieldType::Int32, "Holder")
}

// ============================================================================
// FieldType
// ============================================================================

#[test_case(FieldType::Int32, WireType::Varint)]
#[test_case(FieldType::SInt64, WireType::Varint)]
#[test_case(FieldType::Bool, WireType::Varint)]
#[test_case(FieldType::Enum, WireType::Varint)]
#[test_case(FieldType::Double, WireType::Fixed64)]
#[test_case(FieldType::SFixed64, WireType::Fixed64)]
#[test_case(FieldType::Float, WireType::Fixed32)]
#[test_case(FieldType::Fixed32, WireType::Fixed32)]
#[test_case(FieldType::String, WireType::LengthDelimited)]
#[test_case(FieldType::Bytes, WireType::LengthDelimited)]
#[test_case(FieldType::Message, WireType::LengthDelimited)]
#[test_case(FieldType::Group, WireType::StartGroup)]
fn FieldType___wire_type___matches_encoding(field_type: FieldType, expected: WireType) {
    assert_eq!(field_type.wire_type(), expected);
}

#[test_case(FieldType::Bool, Some(1))]
#[test_case(FieldType::Float, Some(4))]
#[test_case(FieldType::SFixed32, Some(4))]
#[test_case(FieldType::Double, Some(8))]
#[test_case(FieldType::Fixed64, Some(8))]
#[test_case(FieldType::Int32, None)]
#[test_case(FieldType::String, None)]
fn FieldType___fixed_size___only_for_fixed_width(field_type: FieldType, expected: Option<u32>) {
    assert_eq!(field_type.fixed_size(), expected);
}

#[test]
fn FieldType___deserialize___uses_schema_names() {
    let ty: FieldType = serde_json::from_str("\"sfixed32\"").unwrap();

    assert_eq!(ty, FieldType::SFixed32);
    assert_eq!(ty.to_string(), "sfixed32");
}

#[test]
fn FieldType___deserialize_unknown___fails() {
    let result = serde_json::from_str::<FieldType>("\"int128\"");

    assert!(result.is_err());
}

#[test]
fn WireType___from_code___roundtrips_known_codes() {
    for code in 0..=5 {
        assert_eq!(WireType::from_code(code).unwrap().code(), code);
    }
    assert!(WireType::from_code(6).is_none());
}

// ============================================================================
// FieldSchema
// ============================================================================

#[test]
fn FieldSchema___packed_repeated___uses_length_delimited() {
    let field = scalar(3)
        .with_cardinality(Cardinality::Repeated)
        .with_packed(true);

    assert!(field.is_packed());
    assert_eq!(field.wire_type(), WireType::LengthDelimited);
}

#[test]
fn FieldSchema___unpacked_repeated___uses_element_wire_type() {
    let field = scalar(3).with_cardinality(Cardinality::Repeated);

    assert!(!field.is_packed());
    assert_eq!(field.wire_type(), WireType::Varint);
}

#[test]
fn FieldSchema___packed_flag_on_singular___ignored() {
    let field = scalar(3).with_packed(true);

    assert!(!field.is_packed());
    assert_eq!(field.wire_type(), WireType::Varint);
}

#[test]
fn FieldSchema___with_map_entry___sets_map_cardinality() {
    let field = scalar(4).with_map_entry(MapEntry {
        key: FieldType::String,
        value: FieldType::Int64,
        value_type_name: None,
    });

    assert!(field.is_map());
    assert_eq!(field.wire_type(), WireType::LengthDelimited);
}

#[test]
fn FieldSchema___deserialize___applies_defaults() {
    let json = r#"{"name": "id", "number": 1, "type": "uint64", "containing_type": "User"}"#;

    let field: FieldSchema = serde_json::from_str(json).unwrap();

    assert_eq!(field, FieldSchema::new("id", 1, FieldType::UInt64, "User"));
}

#[test]
fn FieldSchema___field_ref___includes_location() {
    let field = scalar(1).with_location(SourceLocation::new("a.proto", 4, 2));

    assert_eq!(field.field_ref().to_string(), "Holder.value (a.proto:4:2)");
}

#[test]
fn FieldSchema___field_ref_for_bare_extension___uses_extendee() {
    let mut field = scalar(100).with_extendee("Base");
    field.containing_type = String::new();

    assert_eq!(field.field_ref().to_string(), "Base.value");
}

// ============================================================================
// Validation
// ============================================================================

#[test_case(1)]
#[test_case(18_999)]
#[test_case(20_000)]
#[test_case(MAX_FIELD_NUMBER)]
fn FieldSchema___validate___accepts_legal_numbers(number: i32) {
    assert!(scalar(number).validate().is_ok());
}

#[test_case(0)]
#[test_case(-5)]
#[test_case(19_000)]
#[test_case(19_999)]
#[test_case(MAX_FIELD_NUMBER + 1)]
fn FieldSchema___validate___rejects_illegal_numbers(number: i32) {
    let err = scalar(number).validate().unwrap_err();

    assert!(matches!(err, GenerationError::InvalidFieldNumber { number: n, .. } if n == number));
}

#[test_case(FieldType::Message)]
#[test_case(FieldType::Group)]
#[test_case(FieldType::Enum)]
fn FieldSchema___validate___requires_type_name(field_type: FieldType) {
    let field = FieldSchema::new("child", 2, field_type, "Parent");

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::MissingTypeName { .. }));
}

#[test_case(FieldType::String)]
#[test_case(FieldType::Bytes)]
fn FieldSchema___validate___rejects_packed_length_delimited(field_type: FieldType) {
    let field = FieldSchema::new("names", 2, field_type, "Parent")
        .with_cardinality(Cardinality::Repeated)
        .with_packed(true);

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::UnsupportedType { .. }));
}

#[test]
fn FieldSchema___validate___rejects_map_without_entry() {
    let field = scalar(2).with_cardinality(Cardinality::Map);

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::MissingMapEntry { .. }));
}

#[test_case(FieldType::Double)]
#[test_case(FieldType::Bytes)]
#[test_case(FieldType::Enum)]
#[test_case(FieldType::Message)]
fn FieldSchema___validate___rejects_illegal_map_keys(key: FieldType) {
    let field = scalar(2).with_map_entry(MapEntry {
        key,
        value: FieldType::String,
        value_type_name: None,
    });

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::UnsupportedType { field_type, .. } if field_type == key));
}

#[test]
fn FieldSchema___validate___map_message_value_needs_type_name() {
    let field = scalar(2).with_map_entry(MapEntry {
        key: FieldType::String,
        value: FieldType::Message,
        value_type_name: None,
    });

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::MissingTypeName { .. }));
}

#[test]
fn FieldSchema___validate___rejects_repeated_oneof_member() {
    let field = scalar(2)
        .with_cardinality(Cardinality::Repeated)
        .with_oneof("choice", 0);

    let err = field.validate().unwrap_err();

    assert!(matches!(err, GenerationError::UnsupportedType { .. }));
}
