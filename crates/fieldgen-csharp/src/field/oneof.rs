//! Members of a oneof

use super::FieldCodeGenerator;
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::{FieldSchema, FieldType, GenerationResult};

/// Oneof member, scalar or message.
///
/// All members of a oneof share `$oneof_name$_` storage and the
/// `$oneof_name$Case_` discriminator, both declared with the message; setting
/// one member replaces whichever sibling was set.
#[derive(Debug, Clone)]
pub struct OneofFieldGenerator {
    context: VariableContext,
    kind: MemberKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberKind {
    Scalar,
    Message,
    Group,
}

impl OneofFieldGenerator {
    pub fn new(context: VariableContext, schema: &FieldSchema) -> Self {
        let kind = match schema.field_type {
            FieldType::Message => MemberKind::Message,
            FieldType::Group => MemberKind::Group,
            _ => MemberKind::Scalar,
        };
        Self { context, kind }
    }
}

impl FieldCodeGenerator for OneofFieldGenerator {
    fn context(&self) -> &VariableContext {
        &self.context
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.kind == MemberKind::Scalar {
            self.print(
                printer,
                "$doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
                 \x20 get { return $has_property_check$ ? ($type_name$) $oneof_name$_ : $default_value$; }\n\
                 \x20 set {\n\
                 \x20   $oneof_name$_ = $checked_value$;\n\
                 \x20   $oneof_name$Case_ = $oneof_property_name$OneofCase.$property_name$;\n\
                 \x20 }\n\
                 }\n",
            )?;
        } else {
            self.print(
                printer,
                "$doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
                 \x20 get { return $has_property_check$ ? ($type_name$) $oneof_name$_ : null; }\n\
                 \x20 set {\n\
                 \x20   $oneof_name$_ = value;\n\
                 \x20   $oneof_name$Case_ = value == null ? $oneof_property_name$OneofCase.None : $oneof_property_name$OneofCase.$property_name$;\n\
                 \x20 }\n\
                 }\n",
            )?;
        }
        self.print(
            printer,
            "/// <summary>Gets whether the \"$descriptor_name$\" field is set</summary>\n\
             $deprecated_attribute$$access_level$ bool Has$property_name$ {\n\
             \x20 get { return $has_property_check$; }\n\
             }\n\
             /// <summary>Clears the value of the oneof if it's currently set to \"$descriptor_name$\"</summary>\n\
             $deprecated_attribute$$access_level$ void Clear$property_name$() {\n\
             \x20 if ($has_property_check$) {\n\
             \x20   Clear$oneof_property_name$();\n\
             \x20 }\n\
             }\n",
        )
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.kind == MemberKind::Scalar {
            return self.print(
                printer,
                "if ($other_has_property_check$) {\n\
                 \x20 $property_name$ = other.$property_name$;\n\
                 }\n",
            );
        }
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
        let read = match self.kind {
            MemberKind::Scalar => return self.print(printer, "$property_name$ = $read_value$;\n"),
            MemberKind::Message => "input.ReadMessage(subBuilder);\n",
            MemberKind::Group => "input.ReadGroup(subBuilder);\n",
        };
        self.print(
            printer,
            "$type_name$ subBuilder = new $type_name$();\n\
             if ($has_property_check$) {\n\
             \x20 subBuilder.MergeFrom($property_name$);\n\
             }\n",
        )?;
        self.print(printer, read)?;
        self.print(printer, "$property_name$ = subBuilder;\n")
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.kind == MemberKind::Group {
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
        if self.kind == MemberKind::Group {
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
            "PrintField(\"$descriptor_name$\", $has_property_check$, $oneof_name$_, writer);\n",
        )
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.kind == MemberKind::Scalar {
            return self.print(
                printer,
                "if ($other_has_property_check$) {\n\
                 \x20 $property_name$ = other.$property_name$;\n\
                 }\n",
            );
        }
        self.print(
            printer,
            "if ($other_has_property_check$) {\n\
             \x20 $property_name$ = other.$property_name$.Clone();\n\
             }\n",
        )
    }

    fn generate_freezing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if self.kind == MemberKind::Scalar {
            return Ok(());
        }
        self.print(printer, "if ($has_property_check$) $property_name$.Freeze();\n")
    }
}

#[cfg(test)]
#[path = "oneof/oneof_tests.rs"]
mod oneof_tests;
