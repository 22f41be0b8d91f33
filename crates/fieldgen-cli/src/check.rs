//! Check command implementation

use crate::input;
use anyhow::Result;
use fieldgen_core::{FieldSchema, GeneratorOptions};
use fieldgen_csharp::{FieldGenerator, Operation, Printer};
use std::path::Path;

/// Validate every field and render one `✓` line per field.
///
/// Each field is run through every operation so template defects surface
/// here as well. Stops at the first failing field.
pub fn check_fields(fields: &[FieldSchema], options: &GeneratorOptions) -> Result<Vec<String>> {
    options.validate()?;

    let mut lines = Vec::with_capacity(fields.len());
    for schema in fields {
        let generator = FieldGenerator::new(schema, options).map_err(|err| {
            let code = err.error_code();
            anyhow::Error::new(err).context(format!("Field check failed (error {code})"))
        })?;

        let mut printer = Printer::new();
        for operation in Operation::ALL {
            generator.generate(operation, &mut printer).map_err(|err| {
                let code = err.error_code();
                anyhow::Error::new(err)
                    .context(format!("{operation} failed (error {code})"))
            })?;
        }

        lines.push(format!(
            "✓ {} #{} ({})",
            schema.field_ref(),
            schema.number,
            generator.variant_name()
        ));
    }
    Ok(lines)
}

/// Check command implementation
pub fn run(input: &Path, config: Option<&Path>, options: &GeneratorOptions) -> Result<()> {
    println!("Checking fields: {}", input.display());
    if let Some(config) = config {
        println!("Using config: {}", config.display());
    }

    let fields = input::load_fields(input)?;
    let lines = check_fields(&fields, options)?;

    println!(
        "✓ Options: access={}, storage attribute={}",
        options.access_level(),
        options.storage_attribute().unwrap_or("none")
    );
    for line in &lines {
        println!("{line}");
    }
    println!("✓ Fields: {}", lines.len());
    println!("\nAll fields are valid!");

    Ok(())
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
