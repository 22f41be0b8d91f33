//! Context command implementation

use crate::input;
use anyhow::{Context, Result};
use fieldgen_core::{GenerationResult, GeneratorOptions};
use fieldgen_csharp::{FieldCodeGenerator, FieldGenerator};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Variables of one field, as printed by `fieldgen context`
#[derive(Debug, Serialize)]
pub struct FieldContext<'a> {
    pub field: String,
    pub variant: &'static str,
    pub variables: &'a BTreeMap<String, String>,
}

/// Print the variable context of every field in `input` as JSON
pub fn run(input: &Path, options: &GeneratorOptions) -> Result<()> {
    let fields = input::load_fields(input)?;

    let generators = fields
        .iter()
        .map(|schema| FieldGenerator::new(schema, options))
        .collect::<GenerationResult<Vec<_>>>()
        .with_context(|| format!("Failed to build variable contexts for {:?}", input))?;

    println!("{}", render(&generators)?);
    Ok(())
}

/// Render the contexts of `generators` as a pretty-printed JSON array
pub fn render(generators: &[FieldGenerator]) -> Result<String> {
    let contexts: Vec<_> = generators
        .iter()
        .map(|generator| FieldContext {
            field: generator.context().field().to_string(),
            variant: generator.variant_name(),
            variables: generator.context().variables(),
        })
        .collect();

    serde_json::to_string_pretty(&contexts).context("Failed to serialize variable contexts")
}
