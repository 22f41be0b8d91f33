//! Map fields

use super::FieldCodeGenerator;
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::{FieldSchema, GenerationResult};

/// Map field stored in an `scg::Dictionary<K, V>`.
///
/// Entries are keyed: merging overwrites existing keys, equality and hashing
/// ignore insertion order. Message values are cloned and frozen recursively.
#[derive(Debug, Clone)]
pub struct MapFieldGenerator {
    context: VariableContext,
    message_values: bool,
}

impl MapFieldGenerator {
    pub fn new(context: VariableContext, schema: &FieldSchema) -> Self {
        Self {
            context,
            message_values: schema
                .map_entry
                .as_ref()
                .is_some_and(|entry| entry.value.is_message()),
        }
    }
}

impl FieldCodeGenerator for MapFieldGenerator {
    fn context(&self) -> &VariableContext {
        &self.context
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "private static readonly pbc::MapField<$key_type_name$, $value_type_name$>.Codec _map_$name$_codec\n\
             \x20   = $codec$;\n\
             $storage_attribute$private $type_name$ _$name$ = new $type_name$();\n\
             $doc_comment$$deprecated_attribute$$access_level$ $type_name$ $property_name$ {\n\
             \x20 get { return _$name$; }\n\
             }\n",
        )
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "foreach (var entry in other._$name$) {\n\
             \x20 _$name$[entry.Key] = entry.Value;\n\
             }\n",
        )
    }

    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "pbc::MapField<$key_type_name$, $value_type_name$>.AddEntriesFrom(_$name$, input, _map_$name$_codec);\n",
        )
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "pbc::MapField<$key_type_name$, $value_type_name$>.WriteTo(_$name$, output, _map_$name$_codec);\n",
        )
    }

    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "size += pbc::MapField<$key_type_name$, $value_type_name$>.CalculateSize(_$name$, _map_$name$_codec);\n",
        )
    }

    fn write_hash(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "hash ^= pbc::MapField<$key_type_name$, $value_type_name$>.GetHashCode(_$name$);\n",
        )
    }

    fn write_equals(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(
            printer,
            "if (!pbc::MapField<$key_type_name$, $value_type_name$>.Equals(_$name$, other._$name$)) return false;\n",
        )
    }

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.print(printer, "PrintField(\"$descriptor_name$\", _$name$, writer);\n")
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if !self.message_values {
            return self.print(printer, "_$name$ = new $type_name$(other._$name$);\n");
        }
        self.print(
            printer,
            "_$name$ = new $type_name$(other._$name$.Count);\n\
             foreach (var entry in other._$name$) {\n\
             \x20 _$name$.Add(entry.Key, entry.Value != null ? entry.Value.Clone() : null);\n\
             }\n",
        )
    }

    fn generate_freezing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        if !self.message_values {
            return Ok(());
        }
        self.print(
            printer,
            "foreach (var entry in _$name$) {\n\
             \x20 if (entry.Value != null) entry.Value.Freeze();\n\
             }\n",
        )
    }
}

#[cfg(test)]
#[path = "map/map_tests.rs"]
mod map_tests;
