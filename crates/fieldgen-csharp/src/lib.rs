//! fieldgen-csharp - Per-field C# code generation for Google.Protobuf
//!
//! This crate provides:
//! - [`VariableContext`] - the substitution variables derived from a field schema
//! - [`FieldGenerator`] - the variant selected for one field, implementing [`FieldCodeGenerator`]
//! - [`Printer`] - the `$variable$`-substituting output sink
//! - [`generate_fields`] - every operation for a list of fields, buffered per field
//!
//! # Example
//!
//! ```
//! use fieldgen_csharp::prelude::*;
//!
//! let schema = FieldSchema::new("values", 3, FieldType::Int32, "Sample")
//!     .with_cardinality(Cardinality::Repeated)
//!     .with_packed(true);
//! let generator = FieldGenerator::new(&schema, &GeneratorOptions::default())?;
//!
//! let mut printer = Printer::new();
//! generator.generate(Operation::Parsing, &mut printer)?;
//! assert_eq!(
//!     printer.output(),
//!     "pbc::RepeatedField<int>.AddEntriesFrom(_values, input, _repeated_values_codec);\n"
//! );
//! # Ok::<(), fieldgen_core::GenerationError>(())
//! ```

pub mod codec_binding;
pub mod context;
pub mod field;
pub mod naming;
pub mod printer;

pub use codec_binding::CodecBinding;
pub use context::VariableContext;
pub use field::{FieldCodeGenerator, FieldGenerator, FieldOutput, Operation, generate_fields};
pub use printer::Printer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldCodeGenerator, FieldGenerator, FieldOutput, Operation, Printer, VariableContext,
        generate_fields,
    };
    pub use fieldgen_core::{
        Cardinality, FieldSchema, FieldType, GenerationError, GenerationResult, GeneratorOptions,
        MapEntry,
    };
}
