//! Extension fields

use super::{FieldCodeGenerator, FieldGenerator};
use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::GenerationResult;

/// Field declared as an extension of another message.
///
/// The value lives in the extended message's extension set, so only the
/// static extension declaration is emitted. It is produced by the variant
/// the field would have as a regular field, which keeps the declaration bound
/// to the same codec.
#[derive(Debug, Clone)]
pub struct ExtensionFieldGenerator {
    value: Box<FieldGenerator>,
}

impl ExtensionFieldGenerator {
    pub fn new(value: FieldGenerator) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    /// Variant describing the extension's value
    pub fn value_generator(&self) -> &FieldGenerator {
        &self.value
    }
}

impl FieldCodeGenerator for ExtensionFieldGenerator {
    fn context(&self) -> &VariableContext {
        self.value.context()
    }

    fn generate_members(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_merging_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_parsing_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_serialization_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_serialized_size_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_hash(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_equals(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_to_string(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_cloning_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    fn generate_extension_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.value.generate_extension_code(printer)
    }
}
