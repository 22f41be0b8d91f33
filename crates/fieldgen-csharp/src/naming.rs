//! Naming convention utilities for generated C# members.
//!
//! # Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `repeated_ints` | [`to_pascal_case`] | `RepeatedInts` |
//! | `repeated_ints` | [`to_camel_case`] | `repeatedInts` |
//! | `field2_name` | [`to_pascal_case`] | `Field2Name` |
//! | `word` | [`capitalize`] | `Word` |

/// Members every generated message class already declares
pub const RESERVED_MEMBER_NAMES: &[&str] = &[
    "Parser",
    "Descriptor",
    "Types",
    "Clone",
    "Equals",
    "GetHashCode",
    "ToString",
    "MergeFrom",
    "WriteTo",
    "CalculateSize",
    "Freeze",
    "IsFrozen",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Convert snake_case to PascalCase.
///
/// Underscores and dashes are dropped and the following letter is
/// capitalized; a letter following a digit is capitalized too.
///
/// # Examples
///
/// ```
/// use fieldgen_csharp::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("repeated_ints"), "RepeatedInts");
/// assert_eq!(to_pascal_case("field2_name"), "Field2Name");
/// assert_eq!(to_pascal_case("v8engine"), "V8Engine");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if c.is_ascii_digit() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use fieldgen_csharp::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("repeated_ints"), "repeatedInts");
/// assert_eq!(to_camel_case("Name"), "name");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

pub fn is_csharp_keyword(s: &str) -> bool {
    CSHARP_KEYWORDS.contains(&s)
}

/// Storage-facing name of a field (`name`), keyword-safe
pub fn field_name(schema_name: &str) -> String {
    let name = to_camel_case(schema_name);
    if is_csharp_keyword(&name) {
        format!("{name}_")
    } else {
        name
    }
}

/// Public property name of a field.
///
/// A trailing `_` is appended when the PascalCase name would hide a member
/// every message declares or would equal the containing class name.
pub fn property_name(schema_name: &str, containing_type: &str) -> String {
    let name = to_pascal_case(schema_name);
    if collides(&name, containing_type) {
        format!("{name}_")
    } else {
        name
    }
}

/// Whether `name` clashes with a generated member or the containing class
pub fn collides(name: &str, containing_type: &str) -> bool {
    RESERVED_MEMBER_NAMES.contains(&name) || name == simple_class_name(containing_type)
}

/// Last segment of a possibly qualified class name
fn simple_class_name(class_name: &str) -> &str {
    class_name.rsplit(['.', ':']).next().unwrap_or(class_name)
}
