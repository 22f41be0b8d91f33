//! Singular scalar, string, bytes and enum fields

use super::FieldCodeGenerator;
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::{FieldSchema, GenerationResult};

/// Singular non-message field outside any oneof.
///
/// Presence is implicit (the value differs from its default) unless the
/// schema assigns a has-bit, in which case `Has`/`Clear` members are emitted.
#[derive(Debug, Clone)]
pub struct PrimitiveFieldGenerator {
    context: VariableContext,
    has_bit: bool,
}

impl PrimitiveFieldGenerator {
    pub fn new(context: VariableContext, schema: &FieldSchema) -> Self {
        Self {
            has_bit: schema.presence_index.is_some() && context.contains("has_field_check"),
            context,
        }
    }
}

impl FieldCodeGenerator for PrimitiveFieldGenerator {
    fn context(&self) -> &VariableContext {
        &self.context
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        if !self.has_bit {
            return self.print(
                printer,
                "$storage_attribute$private $type_name$ _$name$ = $default_value$;\n\
                 $doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
                 \x20 get { return _$name$; }\n\
                 \x20 set {\n\
                 \x20   _$name$ = $checked_value$;\n\
                 \x20 }\n\
                 }\n",
            );
        }

        self.print(
            printer,
            "$storage_attribute$private $type_name$ _$name$;\n\
             $doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
             \x20 get { if ($has_field_check$) { return _$name$; } else { return $default_value$; } }\n\
             \x20 set {\n\
             \x20   $set_has_field$;\n\
             \x20   _$name$ = $checked_value$;\n\
             \x20 }\n\
             }\n\
             /// <summary>Gets whether the \"$descriptor_name$\" field is set</summary>\n\
             $deprecated_attribute$$access_level$ bool Has$property_name$ {\n\
             \x20 get { return $has_field_check$; }\n\
             }\n\
             /// <summary>Clears the value of the \"$descriptor_name$\" field</summary>\n\
             $deprecated_attribute$$access_level$ void Clear$property_name$() {\n\
             \x20 $clear_has_field$;\n\
             }\n",
        )
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if ($other_has_property_check$) {\n\
             \x20 $property_name$ = other.$property_name$;\n\
             }\n",
        )
    }

    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "$property_name$ = $read_value$;\n")
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if ($has_property_check$) {\n\
             \x20 output.WriteRawTag($tag_bytes$);\n\
             \x20 $write_value$;\n\
             }\n",
        )
    }

    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if ($has_property_check$) {\n\
             \x20 size += $tag_size$ + $value_size$;\n\
             }\n",
        )
    }

    fn write_hash(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "if ($has_property_check$) hash ^= $hash_value$;\n")
    }

    fn write_equals(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.has_bit {
            self.print(
                printer,
                "if (Has$property_name$ != other.Has$property_name$) return false;\n",
            )?;
        }
        self.print(printer, "if ($not_equal_check$) return false;\n")
    }

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "PrintField(\"$descriptor_name$\", $has_property_check$, _$name$, writer);\n",
        )
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "_$name$ = other._$name$;\n")
    }

    fn generate_extension_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        super::require_extendee(&self.context)?;
        self.print(
            printer,
            "$doc_comment$$deprecated_attribute$$access_level$ static readonly pb::Extension<$extended_type$, $type_name$> $property_name$ =\n\
             \x20 new pb::Extension<$extended_type$, $type_name$>($number$, $codec$);\n",
        )
    }
}
