//! Singular embedded message and group fields

use super::FieldCodeGenerator;
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::{FieldSchema, FieldType, GenerationResult};

/// Singular message field; presence is a non-null reference.
///
/// Merge, clone and freeze recurse into the embedded message. Groups use
/// the same storage but are framed by start and end tags on the wire.
#[derive(Debug, Clone)]
pub struct MessageFieldGenerator {
    context: VariableContext,
    group: bool,
}

impl MessageFieldGenerator {
    pub fn new(context: VariableContext, schema: &FieldSchema) -> Self {
        Self {
            context,
            group: schema.field_type == FieldType::Group,
        }
    }
}

impl FieldCodeGenerator for MessageFieldGenerator {
    fn context(&self) -> &VariableContext {
        &self.context
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "$storage_attribute$private $type_name$ _$name$;\n\
             $doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
             \x20 get { return _$name$; }\n\
             \x20 set {\n\
             \x20   _$name$ = value;\n\
             \x20 }\n\
             }\n",
        )
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if ($other_has_property_check$) {\n\
             \x20 if ($has_not_property_check$) {\n\
             \x20   $property_name$ = new $type_name$();\n\
             \x20 }\n\
             \x20 $property_name$.MergeFrom(other.$property_name$);\n\
             }\n",
        )
    }

    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if ($has_not_property_check$) {\n\
             \x20 $property_name$ = new $type_name$();\n\
             }\n",
        )?;
        if self.group {
            self.print(printer, "input.ReadGroup($property_name$);\n")
        } else {
            self.print(printer, "input.ReadMessage($property_name$);\n")
        }
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.group {
            return self.print(
                printer,
                "if ($has_property_check$) {\n\
                 \x20 output.WriteRawTag($tag_bytes$);\n\
                 \x20 $write_value$;\n\
                 \x20 output.WriteRawTag($end_tag_bytes$);\n\
                 }\n",
            );
        }
        self.print(
            printer,
            "if ($has_property_check$) {\n\
             \x20 output.WriteRawTag($tag_bytes$);\n\
             \x20 $write_value$;\n\
             }\n",
        )
    }

    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.group {
            return self.print(
                printer,
                "if ($has_property_check$) {\n\
                 \x20 size += $tag_size$ * 2 + $value_size$;\n\
                 }\n",
            );
        }
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
        self.print(printer, "if ($not_equal_check$) return false;\n")
    }

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "PrintField(\"$descriptor_name$\", $has_property_check$, _$name$, writer);\n",
        )
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "_$name$ = $other_has_property_check$ ? other._$name$.Clone() : null;\n",
        )
    }

    fn generate_freezing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "if ($has_property_check$) _$name$.Freeze();\n")
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
