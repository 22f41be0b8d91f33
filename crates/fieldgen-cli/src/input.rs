//! Loading field schemas and generator options from disk

use anyhow::{Context, Result};
use fieldgen_core::{FieldSchema, GeneratorOptions};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Accepted layouts of the field schema file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldFile {
    List(Vec<FieldSchema>),
    Wrapped { fields: Vec<FieldSchema> },
}

/// Load field schemas from a JSON file
pub fn load_fields(path: impl AsRef<Path>) -> Result<Vec<FieldSchema>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read field schemas: {:?}", path.as_ref()))?;

    let fields = parse_fields(&content)
        .with_context(|| format!("Invalid field schemas in {:?}", path.as_ref()))?;
    debug!(count = fields.len(), path = ?path.as_ref(), "loaded field schemas");
    Ok(fields)
}

/// Parse field schemas from a JSON array or a `{ "fields": [...] }` object
pub fn parse_fields(content: &str) -> Result<Vec<FieldSchema>> {
    let file: FieldFile = serde_json::from_str(content).context("Failed to parse field schemas")?;
    Ok(match file {
        FieldFile::List(fields) | FieldFile::Wrapped { fields } => fields,
    })
}

/// Load generator options; defaults when no path is given
pub fn load_options(path: Option<impl AsRef<Path>>) -> Result<GeneratorOptions> {
    let Some(path) = path else {
        return Ok(GeneratorOptions::default());
    };
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    let options = parse_options(&content, is_json(path))
        .with_context(|| format!("Invalid config in {:?}", path))?;
    Ok(options)
}

/// Parse generator options as JSON or TOML, then validate them
pub fn parse_options(content: &str, json: bool) -> Result<GeneratorOptions> {
    let options = if json {
        GeneratorOptions::from_json(content.as_bytes())?
    } else {
        GeneratorOptions::from_toml(content)?
    };
    options.validate()?;
    Ok(options)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
