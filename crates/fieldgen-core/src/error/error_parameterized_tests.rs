#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn field_ref() -> FieldRef {
    FieldRef::new("Outer", "inner")
}

// ============================================================================
// Parameterized error code mapping tests
// ============================================================================

#[test_case(GenerationError::InvalidFieldNumber { field: field_ref(), number: 0 }, 1, "InvalidFieldNumber")]
#[test_case(
    GenerationError::UnsupportedType {
        field: field_ref(),
        field_type: FieldType::Group,
        reason: "groups cannot be map values".into(),
    },
    2,
    "UnsupportedType"
)]
#[test_case(GenerationError::MissingTypeName { field: field_ref(), field_type: FieldType::Enum }, 3, "MissingTypeName")]
#[test_case(GenerationError::MissingMapEntry { field: field_ref() }, 4, "MissingMapEntry")]
#[test_case(GenerationError::MissingExtendee { field: field_ref() }, 5, "MissingExtendee")]
#[test_case(GenerationError::MissingVariable { field: field_ref(), variable: "tag".into() }, 6, "MissingVariable")]
#[test_case(GenerationError::MalformedTemplate { template: "$".into(), offset: 0 }, 7, "MalformedTemplate")]
#[test_case(GenerationError::Config("test".into()), 8, "Config")]
fn GenerationError___variant___maps_to_correct_code(
    error: GenerationError,
    expected_code: u32,
    _variant_name: &str,
) {
    assert_eq!(
        error.error_code(),
        expected_code,
        "{} should map to code {}",
        _variant_name,
        expected_code
    );
}

// ============================================================================
// Parameterized field context tests
// ============================================================================

#[test_case(GenerationError::InvalidFieldNumber { field: field_ref(), number: 19_000 })]
#[test_case(GenerationError::MissingTypeName { field: field_ref(), field_type: FieldType::Message })]
#[test_case(GenerationError::MissingExtendee { field: field_ref() })]
#[test_case(GenerationError::MissingVariable { field: field_ref(), variable: "codec".into() })]
fn GenerationError___field_errors___mention_field_in_message(error: GenerationError) {
    assert!(error.to_string().starts_with("Outer.inner: "));
}
