//! Repeated embedded message and group fields

use super::FieldCodeGenerator;
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::GenerationResult;

/// Repeated message field; elements are cloned and frozen individually
#[derive(Debug, Clone)]
pub struct RepeatedMessageFieldGenerator {
    context: VariableContext,
}

impl RepeatedMessageFieldGenerator {
    pub fn new(context: VariableContext) -> Self {
        Self { context }
    }
}

impl FieldCodeGenerator for RepeatedMessageFieldGenerator {
    fn context(&self) -> &VariableContext {
        &self.context
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "private static readonly pb::FieldCodec<$type_name$> _repeated_$name$_codec\n\
             \x20   = $codec$;\n\
             $storage_attribute$private scg::List<$type_name$> _$name$ = new scg::List<$type_name$>();\n\
             $doc_comment$$deprecated_attribute$$access_level$ scg::List<$type_name$> $property_name$ {\n\
             \x20 get { return _$name$; }\n\
             }\n",
        )
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "_$name$.AddRange(other._$name$);\n")
    }

    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "pbc::RepeatedField<$type_name$>.AddEntriesFrom(_$name$, input, _repeated_$name$_codec);\n",
        )
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "pbc::RepeatedField<$type_name$>.WriteTo(_$name$, output, _repeated_$name$_codec);\n",
        )
    }

    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "size += pbc::RepeatedField<$type_name$>.CalculateSize(_$name$, _repeated_$name$_codec);\n",
        )
    }

    fn write_hash(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "hash ^= pbc::RepeatedField<$type_name$>.GetHashCode(_$name$);\n",
        )
    }

    fn write_equals(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if (!pbc::RepeatedField<$type_name$>.Equals(_$name$, other._$name$)) return false;\n",
        )
    }

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "PrintField(\"$descriptor_name$\", _$name$, writer);\n")
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "_$name$ = new scg::List<$type_name$>(other._$name$.Count);\n\
             foreach (var element in other._$name$) {\n\
             \x20 _$name$.Add(element.Clone());\n\
             }\n",
        )
    }

    fn generate_freezing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "foreach (var element in _$name$) {\n\
             \x20 element.Freeze();\n\
             }\n",
        )
    }

    fn generate_extension_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        super::require_extendee(&self.context)?;
        self.print(
            printer,
            "$doc_comment$$deprecated_attribute$$access_level$ static readonly pb::RepeatedExtension<$extended_type$, $type_name$> $property_name$ =\n\
             \x20 new pb::RepeatedExtension<$extended_type$, $type_name$>($number$, $codec$);\n",
        )
    }
}
