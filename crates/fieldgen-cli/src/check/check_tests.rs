#![allow(non_snake_case)]

use super::*;
use fieldgen_core::{FieldType, GenerationError, SourceLocation};

#[test]
fn check_fields___valid_fields___one_line_each() {
    let fields = vec![
        FieldSchema::new("name", 1, FieldType::String, "Person"),
        FieldSchema::new("friend", 2, FieldType::Message, "Person").with_type_name("Person"),
    ];

    let lines = check_fields(&fields, &GeneratorOptions::default()).unwrap();

    assert_eq!(
        lines,
        vec![
            "✓ Person.name #1 (primitive)".to_string(),
            "✓ Person.friend #2 (message)".to_string(),
        ]
    );
}

#[test]
fn check_fields___reserved_number___error_with_field_and_location() {
    let fields = vec![
        FieldSchema::new("ok", 1, FieldType::Int32, "M"),
        FieldSchema::new("bad", 19_500, FieldType::Int32, "M")
            .with_location(SourceLocation::new("sample.proto", 7, 3)),
    ];

    let err = check_fields(&fields, &GeneratorOptions::default()).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("error 1"));
    assert!(message.contains("M.bad"));
    assert!(message.contains("sample.proto:7:3"));
    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::InvalidFieldNumber { number: 19_500, .. })
    ));
}

#[test]
fn check_fields___enum_without_type_name___missing_type_name() {
    let fields = vec![FieldSchema::new("kind", 1, FieldType::Enum, "M")];

    let err = check_fields(&fields, &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::MissingTypeName { .. })
    ));
}

#[test]
fn check_fields___invalid_options___config_error() {
    let options = GeneratorOptions::default().with_storage_attribute("[A]\n[B]");

    let err = check_fields(&[], &options).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::Config(_))
    ));
}
