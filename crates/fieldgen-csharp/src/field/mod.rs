//! Field generator variants and their dispatcher.
//!
//! Every variant implements [`FieldCodeGenerator`]: eleven operations, each
//! substituting the field's [`VariableContext`] into fixed templates. The
//! closed set of variants is the [`FieldGenerator`] enum; [`FieldGenerator::new`]
//! picks exactly one per field.

mod extension;
mod map;
mod message;
mod oneof;
mod primitive;
mod repeated_message;
mod repeated_primitive;

pub use extension::ExtensionFieldGenerator;
pub use map::MapFieldGenerator;
pub use message::MessageFieldGenerator;
pub use oneof::OneofFieldGenerator;
pub use primitive::PrimitiveFieldGenerator;
pub use repeated_message::RepeatedMessageFieldGenerator;
pub use repeated_primitive::RepeatedPrimitiveFieldGenerator;

use crate::context::VariableContext;
use crate::printer::Printer;
use fieldgen_core::{FieldSchema, GenerationError, GenerationResult, GeneratorOptions};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// The operation contract shared by every field category.
///
/// Operations only substitute the context into templates; anything that
/// depends on the schema was decided when the context was built.
pub trait FieldCodeGenerator {
    /// Variables this generator substitutes
    fn context(&self) -> &VariableContext;

    /// Storage declaration, static codec, and public accessor
    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Body of `MergeFrom(other)` for this field
    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Statements run after this field's tag is read from `input`
    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Body of `WriteTo(output)` for this field
    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Body of `CalculateSize()` for this field
    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()>;

    fn write_hash(&self, printer: &mut Printer) -> GenerationResult<()>;

    fn write_equals(&self, printer: &mut Printer) -> GenerationResult<()>;

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Body of the copy constructor for this field
    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()>;

    /// Body of `Freeze()` for this field; scalar storage needs nothing
    fn generate_freezing_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    /// Static extension declaration
    fn generate_extension_code(&self, _printer: &mut Printer) -> GenerationResult<()> {
        Ok(())
    }

    /// Substitute this generator's context into `template`
    fn print(&self, printer: &mut Printer, template: &str) -> GenerationResult<()> {
        printer.print(self.context(), template)
    }
}

/// Fails with `MissingExtendee` unless `context` belongs to an extension field
fn require_extendee(context: &VariableContext) -> GenerationResult<()> {
    if context.is_extension() {
        Ok(())
    } else {
        Err(GenerationError::MissingExtendee {
            field: context.field().clone(),
        })
    }
}

/// One generation operation, in the order an orchestrator invokes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Members,
    Merging,
    Parsing,
    Serialization,
    SerializedSize,
    Hash,
    Equals,
    ToString,
    Cloning,
    Freezing,
    Extension,
}

impl Operation {
    /// Every operation, in invocation order
    pub const ALL: [Operation; 11] = [
        Operation::Members,
        Operation::Merging,
        Operation::Parsing,
        Operation::Serialization,
        Operation::SerializedSize,
        Operation::Hash,
        Operation::Equals,
        Operation::ToString,
        Operation::Cloning,
        Operation::Freezing,
        Operation::Extension,
    ];

    /// Name of the generator method implementing this operation
    pub fn method_name(self) -> &'static str {
        match self {
            Operation::Members => "GenerateMembers",
            Operation::Merging => "GenerateMergingCode",
            Operation::Parsing => "GenerateParsingCode",
            Operation::Serialization => "GenerateSerializationCode",
            Operation::SerializedSize => "GenerateSerializedSizeCode",
            Operation::Hash => "WriteHash",
            Operation::Equals => "WriteEquals",
            Operation::ToString => "WriteToString",
            Operation::Cloning => "GenerateCloningCode",
            Operation::Freezing => "GenerateFreezingCode",
            Operation::Extension => "GenerateExtensionCode",
        }
    }

    /// Short command-line name
    pub fn short_name(self) -> &'static str {
        match self {
            Operation::Members => "members",
            Operation::Merging => "merging",
            Operation::Parsing => "parsing",
            Operation::Serialization => "serialization",
            Operation::SerializedSize => "serialized-size",
            Operation::Hash => "hash",
            Operation::Equals => "equals",
            Operation::ToString => "to-string",
            Operation::Cloning => "cloning",
            Operation::Freezing => "freezing",
            Operation::Extension => "extension",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

impl FromStr for Operation {
    type Err = GenerationError;

    /// Accepts the short name or the method name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.short_name() == s || op.method_name() == s)
            .ok_or_else(|| GenerationError::Config(format!("unknown operation: {s}")))
    }
}

/// The generator selected for one field
#[derive(Debug, Clone)]
pub enum FieldGenerator {
    Primitive(PrimitiveFieldGenerator),
    RepeatedPrimitive(RepeatedPrimitiveFieldGenerator),
    Message(MessageFieldGenerator),
    RepeatedMessage(RepeatedMessageFieldGenerator),
    Map(MapFieldGenerator),
    Oneof(OneofFieldGenerator),
    Extension(ExtensionFieldGenerator),
}

impl FieldGenerator {
    /// Build the context for `schema` and select its variant
    pub fn new(schema: &FieldSchema, options: &GeneratorOptions) -> GenerationResult<Self> {
        let context = VariableContext::build(schema, options)?;
        let generator = if schema.is_extension() {
            FieldGenerator::Extension(ExtensionFieldGenerator::new(Self::select(
                schema, context,
            )))
        } else {
            Self::select(schema, context)
        };

        debug!(
            field = %schema.field_ref(),
            variant = generator.variant_name(),
            "selected field generator"
        );
        Ok(generator)
    }

    fn select(schema: &FieldSchema, context: VariableContext) -> Self {
        let message = schema.field_type.is_message();
        if schema.is_map() {
            FieldGenerator::Map(MapFieldGenerator::new(context, schema))
        } else if schema.is_repeated() && message {
            FieldGenerator::RepeatedMessage(RepeatedMessageFieldGenerator::new(context))
        } else if schema.is_repeated() {
            FieldGenerator::RepeatedPrimitive(RepeatedPrimitiveFieldGenerator::new(context))
        } else if schema.oneof.is_some() {
            FieldGenerator::Oneof(OneofFieldGenerator::new(context, schema))
        } else if message {
            FieldGenerator::Message(MessageFieldGenerator::new(context, schema))
        } else {
            FieldGenerator::Primitive(PrimitiveFieldGenerator::new(context, schema))
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            FieldGenerator::Primitive(_) => "primitive",
            FieldGenerator::RepeatedPrimitive(_) => "repeated_primitive",
            FieldGenerator::Message(_) => "message",
            FieldGenerator::RepeatedMessage(_) => "repeated_message",
            FieldGenerator::Map(_) => "map",
            FieldGenerator::Oneof(_) => "oneof",
            FieldGenerator::Extension(_) => "extension",
        }
    }

    /// Run one operation
    pub fn generate(&self, operation: Operation, printer: &mut Printer) -> GenerationResult<()> {
        trace!(field = %self.context().field(), %operation, "generating");
        let generator = self.inner();
        match operation {
            Operation::Members => generator.generate_members(printer),
            Operation::Merging => generator.generate_merging_code(printer),
            Operation::Parsing => generator.generate_parsing_code(printer),
            Operation::Serialization => generator.generate_serialization_code(printer),
            Operation::SerializedSize => generator.generate_serialized_size_code(printer),
            Operation::Hash => generator.write_hash(printer),
            Operation::Equals => generator.write_equals(printer),
            Operation::ToString => generator.write_to_string(printer),
            Operation::Cloning => generator.generate_cloning_code(printer),
            Operation::Freezing => generator.generate_freezing_code(printer),
            Operation::Extension if !self.context().is_extension() => Ok(()),
            Operation::Extension => generator.generate_extension_code(printer),
        }
    }

    fn inner(&self) -> &dyn FieldCodeGenerator {
        match self {
            FieldGenerator::Primitive(g) => g,
            FieldGenerator::RepeatedPrimitive(g) => g,
            FieldGenerator::Message(g) => g,
            FieldGenerator::RepeatedMessage(g) => g,
            FieldGenerator::Map(g) => g,
            FieldGenerator::Oneof(g) => g,
            FieldGenerator::Extension(g) => g,
        }
    }
}

impl FieldCodeGenerator for FieldGenerator {
    fn context(&self) -> &VariableContext {
        self.inner().context()
    }

    fn generate_members(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Members, printer)
    }

    fn generate_merging_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Merging, printer)
    }

    fn generate_parsing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Parsing, printer)
    }

    fn generate_serialization_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Serialization, printer)
    }

    fn generate_serialized_size_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::SerializedSize, printer)
    }

    fn write_hash(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Hash, printer)
    }

    fn write_equals(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Equals, printer)
    }

    fn write_to_string(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::ToString, printer)
    }

    fn generate_cloning_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Cloning, printer)
    }

    fn generate_freezing_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Freezing, printer)
    }

    fn generate_extension_code(&self, printer: &mut Printer) -> GenerationResult<()> {
        self.generate(Operation::Extension, printer)
    }
}

/// Fragments generated for one field, one section per operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutput {
    /// Field name as written in the schema
    pub descriptor_name: String,
    /// Variant that produced the fragments
    pub variant: &'static str,
    /// `(operation, fragment)` in [`Operation::ALL`] order
    pub sections: Vec<(Operation, String)>,
}

impl FieldOutput {
    /// Fragment for `operation`; empty when the variant emits nothing
    pub fn section(&self, operation: Operation) -> &str {
        self.sections
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }
}

/// Generate every operation for every field into independent buffers.
///
/// Output order follows `fields`; the first error stops generation.
pub fn generate_fields(
    fields: &[FieldSchema],
    options: &GeneratorOptions,
) -> GenerationResult<Vec<FieldOutput>> {
    fields
        .iter()
        .map(|schema| {
            let generator = FieldGenerator::new(schema, options)?;
            let sections = Operation::ALL
                .into_iter()
                .map(|operation| {
                    let mut printer = Printer::new();
                    generator.generate(operation, &mut printer)?;
                    Ok((operation, printer.into_output()))
                })
                .collect::<GenerationResult<Vec<_>>>()?;
            Ok(FieldOutput {
                descriptor_name: schema.name.clone(),
                variant: generator.variant_name(),
                sections,
            })
        })
        .collect()
}
