//! Generate command implementation

use crate::input;
use anyhow::{Context, Result};
use fieldgen_core::GeneratorOptions;
use fieldgen_csharp::{FieldOutput, Operation, Printer, generate_fields};
use std::path::Path;
use tracing::info;

/// Generate fragments for every field in `input` and print them to stdout
pub fn run(input: &Path, options: &GeneratorOptions, operation: Option<Operation>) -> Result<()> {
    let fields = input::load_fields(input)?;

    let outputs = generate_fields(&fields, options)
        .with_context(|| format!("Failed to generate code for {:?}", input))?;
    info!(fields = outputs.len(), "generated field code");

    print!("{}", render(&outputs, operation));
    Ok(())
}

/// Lay out generated fragments grouped per operation.
///
/// Each group starts with a `// <method name>` header; fields whose fragment
/// is empty for an operation are left out of that group, and empty groups are
/// skipped entirely.
pub fn render(outputs: &[FieldOutput], only: Option<Operation>) -> String {
    let operations = match only {
        Some(operation) => vec![operation],
        None => Operation::ALL.to_vec(),
    };

    let mut printer = Printer::new();
    for operation in operations {
        let fragments: Vec<_> = outputs
            .iter()
            .map(|output| (output, output.section(operation)))
            .filter(|(_, text)| !text.is_empty())
            .collect();
        if fragments.is_empty() {
            continue;
        }

        if !printer.is_empty() {
            printer.print_raw("\n");
        }
        printer.print_raw(&format!("// {operation}\n"));
        printer.indent();
        for (output, text) in fragments {
            printer.print_raw(&format!(
                "// {} ({})\n",
                output.descriptor_name, output.variant
            ));
            printer.print_raw(text);
        }
        printer.outdent();
    }
    printer.into_output()
}
