//! Append-only text sink with `$variable$` substitution.
//!
//! Templates reference context variables as `$name$`; `$$` writes a literal
//! dollar sign. Substituted values are inserted verbatim and never rescanned.
//! Every non-empty line is prefixed with the current indentation.

use crate::context::VariableContext;
use fieldgen_core::{GenerationError, GenerationResult};

const INDENT: &str = "  ";

/// Output sink shared by all operations of a generation pass
#[derive(Debug, Clone)]
pub struct Printer {
    output: String,
    indent: usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Substitute `variables` into `template` and append the result
    pub fn print(&mut self, variables: &VariableContext, template: &str) -> GenerationResult<()> {
        let text = substitute(variables, template)?;
        self.write(&text);
        Ok(())
    }

    /// Append text without substitution
    pub fn print_raw(&mut self, text: &str) {
        self.write(text);
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation; extra calls stop at column zero
    pub fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn write(&mut self, text: &str) {
        for line in text.split_inclusive('\n') {
            if self.at_line_start && line != "\n" {
                for _ in 0..self.indent {
                    self.output.push_str(INDENT);
                }
            }
            self.output.push_str(line);
            self.at_line_start = line.ends_with('\n');
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand every `$name$` in `template`
pub fn substitute(variables: &VariableContext, template: &str) -> GenerationResult<String> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(len) = after.find('$') else {
            return Err(GenerationError::MalformedTemplate {
                template: template.to_string(),
                offset: template.len() - rest.len() + start,
            });
        };

        let name = &after[..len];
        if name.is_empty() {
            result.push('$');
        } else {
            let value = variables
                .get(name)
                .ok_or_else(|| GenerationError::MissingVariable {
                    field: variables.field().clone(),
                    variable: name.to_string(),
                })?;
            result.push_str(value);
        }
        rest = &after[len + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
#[path = "printer/printer_tests.rs"]
mod printer_tests;
