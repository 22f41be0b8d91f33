//! Per-field substitution variables

use crate::codec_binding::{CodecBinding, entry_codec};
use crate::naming;
use fieldgen_core::{FieldRef, FieldSchema, GenerationError, GenerationResult, GeneratorOptions};
use fieldgen_wire::Tag;
use std::collections::BTreeMap;
use tracing::warn;

const OBSOLETE_ATTRIBUTE: &str = "[global::System.ObsoleteAttribute]\n";

/// Mapping from variable names to the strings substituted for `$name$`.
///
/// Built once per field. Every value is final text: the printer never
/// rescans a substituted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableContext {
    field: FieldRef,
    extension: bool,
    variables: BTreeMap<String, String>,
}

impl VariableContext {
    /// Context with no variables, reporting errors against `field`
    pub fn empty(field: FieldRef) -> Self {
        Self {
            field,
            extension: false,
            variables: BTreeMap::new(),
        }
    }

    /// Derive every variable the generator variants use for `schema`
    pub fn build(schema: &FieldSchema, options: &GeneratorOptions) -> GenerationResult<Self> {
        schema.validate()?;
        options.validate()?;

        let field = schema.field_ref();
        let tag = Tag::for_field(schema).map_err(|_| GenerationError::InvalidFieldNumber {
            field: field.clone(),
            number: schema.number,
        })?;

        let mut context = Self::empty(field);
        context.extension = schema.is_extension();
        let name = naming::field_name(&schema.name);
        let property_name = naming::property_name(&schema.name, &schema.containing_type);
        if property_name != naming::to_pascal_case(&schema.name) {
            warn!(field = %context.field, property = %property_name, "renamed property to avoid a collision");
        }

        context.insert_common(schema, options, &name, &property_name, tag);
        if schema.is_map() {
            context.insert_map(schema, tag)?;
        } else {
            let binding = CodecBinding::new(
                schema.field_type,
                schema.type_name.as_deref(),
                &context.field,
            )?;
            context.insert_value(schema, &binding, &property_name, tag);
        }

        if let Some(oneof) = &schema.oneof {
            let oneof_name = naming::field_name(&oneof.name);
            let oneof_property_name =
                naming::property_name(&oneof.name, &schema.containing_type);
            let case = format!("{oneof_property_name}OneofCase.{property_name}");
            context.insert_presence(
                format!("{oneof_name}Case_ == {case}"),
                format!("other.{oneof_name}Case_ == {case}"),
                format!("{oneof_name}Case_ != {case}"),
            );
            context.insert("oneof_name", oneof_name);
            context.insert("oneof_property_name", oneof_property_name);
        } else if let Some(index) = schema.presence_index
            && !schema.field_type.is_message()
            && !schema.is_repeated()
            && !schema.is_map()
        {
            let word = index / 32;
            let mask = 1u32 << (index % 32);
            context.insert("has_field_check", format!("(_hasBits{word} & {mask}) != 0"));
            context.insert("set_has_field", format!("_hasBits{word} |= {mask}"));
            context.insert("clear_has_field", format!("_hasBits{word} &= ~{mask}"));
            context.insert_presence(
                format!("Has{property_name}"),
                format!("other.Has{property_name}"),
                format!("!Has{property_name}"),
            );
        }

        Ok(context)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Set a variable, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Field that errors raised while printing are reported against
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// Whether the field extends another message
    pub fn is_extension(&self) -> bool {
        self.extension
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn insert_common(
        &mut self,
        schema: &FieldSchema,
        options: &GeneratorOptions,
        name: &str,
        property_name: &str,
        tag: Tag,
    ) {
        self.insert("name", name);
        self.insert("property_name", property_name);
        self.insert("descriptor_name", schema.name.as_str());
        self.insert("number", schema.number.to_string());
        self.insert("tag", tag.value().to_string());
        self.insert("tag_size", tag.size().to_string());
        self.insert("tag_bytes", byte_list(&tag.bytes()));
        self.insert("access_level", options.access_level());
        self.insert(
            "extended_type",
            schema
                .extendee
                .as_deref()
                .unwrap_or(&schema.containing_type),
        );
        self.insert(
            "storage_attribute",
            options
                .storage_attribute()
                .map(|attribute| format!("[{attribute}]\n"))
                .unwrap_or_default(),
        );
        self.insert(
            "doc_comment",
            if options.emit_doc_comments {
                doc_comment(&schema.docs)
            } else {
                String::new()
            },
        );
        self.insert(
            "deprecated_attribute",
            if schema.deprecated {
                OBSOLETE_ATTRIBUTE
            } else {
                ""
            },
        );
    }

    fn insert_value(
        &mut self,
        schema: &FieldSchema,
        binding: &CodecBinding,
        property_name: &str,
        tag: Tag,
    ) {
        let other = format!("other.{property_name}");

        self.insert("type_name", binding.type_name());
        self.insert("capitalized_type_name", binding.capitalized_type_name());
        self.insert(
            "default_value",
            schema
                .default_value
                .clone()
                .unwrap_or_else(|| binding.default_value()),
        );
        self.insert("codec", binding.codec(tag));
        self.insert("write_value", binding.write_value(property_name));
        self.insert("value_size", binding.value_size(property_name));
        self.insert("hash_value", binding.hash_value(property_name));
        self.insert("not_equal_check", binding.not_equal(property_name, &other));
        self.insert("checked_value", binding.checked_value());
        if let Some(read) = binding.read_value() {
            self.insert("read_value", read);
        }
        if let Some(size) = schema.field_type.fixed_size() {
            self.insert("fixed_size", size.to_string());
        }
        if binding.is_group() {
            let end_tag = tag.end_group();
            self.insert("end_tag", end_tag.value().to_string());
            self.insert("end_tag_bytes", byte_list(&end_tag.bytes()));
        }

        let storage = format!("_{}", naming::field_name(&schema.name));
        if schema.is_repeated() {
            self.insert_presence(
                format!("{storage}.Count != 0"),
                format!("other.{storage}.Count != 0"),
                format!("{storage}.Count == 0"),
            );
        } else if binding.is_message() {
            self.insert_presence(
                format!("{storage} != null"),
                format!("other.{storage} != null"),
                format!("{storage} == null"),
            );
        } else {
            let check = binding.is_set(property_name);
            self.insert_presence(
                check.clone(),
                binding.is_set(&other),
                format!("!({check})"),
            );
        }
    }

    fn insert_map(&mut self, schema: &FieldSchema, tag: Tag) -> GenerationResult<()> {
        let Some(entry) = &schema.map_entry else {
            return Err(GenerationError::MissingMapEntry {
                field: self.field.clone(),
            });
        };
        let key = CodecBinding::new(entry.key, None, &self.field)?;
        let value = CodecBinding::new(
            entry.value,
            entry.value_type_name.as_deref(),
            &self.field,
        )?;
        let key_codec = entry_codec(entry.key, None, 1, &self.field)?;
        let value_codec = entry_codec(
            entry.value,
            entry.value_type_name.as_deref(),
            2,
            &self.field,
        )?;

        let pair = format!("{}, {}", key.type_name(), value.type_name());
        let storage = format!("_{}", naming::field_name(&schema.name));

        self.insert("key_type_name", key.type_name());
        self.insert("value_type_name", value.type_name());
        self.insert("type_name", format!("scg::Dictionary<{pair}>"));
        self.insert("capitalized_type_name", "Message");
        self.insert("default_value", "null");
        self.insert(
            "codec",
            format!(
                "new pbc::MapField<{pair}>.Codec({key_codec}, {value_codec}, {})",
                tag.value()
            ),
        );
        self.insert("key_codec", key_codec);
        self.insert("value_codec", value_codec);
        self.insert_presence(
            format!("{storage}.Count != 0"),
            format!("other.{storage}.Count != 0"),
            format!("{storage}.Count == 0"),
        );
        Ok(())
    }

    fn insert_presence(&mut self, has: String, other_has: String, has_not: String) {
        self.insert("has_property_check", has);
        self.insert("other_has_property_check", other_has);
        self.insert("has_not_property_check", has_not);
    }
}

/// `8, 1` style list of decimal byte values
fn byte_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn doc_comment(docs: &[String]) -> String {
    if docs.is_empty() {
        return String::new();
    }
    let mut comment = String::from("/// <summary>\n");
    for line in docs {
        let escaped = line
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let escaped = escaped.trim_end();
        if escaped.is_empty() {
            comment.push_str("///\n");
        } else {
            comment.push_str(&format!("/// {escaped}\n"));
        }
    }
    comment.push_str("/// </summary>\n");
    comment
}
