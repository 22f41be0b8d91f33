#![allow(non_snake_case)]

use super::*;
use fieldgen_core::GeneratorOptions;

fn generator(schema: &FieldSchema) -> OneofFieldGenerator {
    let context = VariableContext::build(schema, &GeneratorOptions::default()).unwrap();
    OneofFieldGenerator::new(context, schema)
}

fn render(
    generator: &OneofFieldGenerator,
    op: fn(&OneofFieldGenerator, &mut Printer) -> GenerationResult<()>,
) -> String {
    let mut printer = Printer::new();
    op(generator, &mut printer).unwrap();
    printer.into_output()
}

fn text() -> FieldSchema {
    FieldSchema::new("text", 4, FieldType::String, "Note").with_oneof("body", 0)
}

fn image() -> FieldSchema {
    FieldSchema::new("image", 5, FieldType::Message, "Note")
        .with_type_name("global::Media.Image")
        .with_oneof("body", 0)
}

#[test]
fn OneofFieldGenerator___scalar_members___shared_storage_and_case() {
    let output = render(&generator(&text()), |g, p| g.generate_members(p));

    assert!(output.starts_with(
        "public string Text {\n\
         \x20 get { return bodyCase_ == BodyOneofCase.Text ? (string) body_ : \"\"; }\n\
         \x20 set {\n\
         \x20   body_ = pb::ProtoPreconditions.CheckNotNull(value, \"value\");\n\
         \x20   bodyCase_ = BodyOneofCase.Text;\n\
         \x20 }\n\
         }\n"
    ));
}

#[test]
fn OneofFieldGenerator___members___has_and_clear_helpers() {
    let output = render(&generator(&text()), |g, p| g.generate_members(p));

    assert!(output.contains("public bool HasText {\n  get { return bodyCase_ == BodyOneofCase.Text; }\n}\n"));
    assert!(output.contains(
        "public void ClearText() {\n  if (bodyCase_ == BodyOneofCase.Text) {\n    ClearBody();\n  }\n}\n"
    ));
}

#[test]
fn OneofFieldGenerator___message_setter___null_clears_case() {
    let output = render(&generator(&image()), |g, p| g.generate_members(p));

    assert!(output.contains(
        "bodyCase_ = value == null ? BodyOneofCase.None : BodyOneofCase.Image;"
    ));
    assert!(output.contains(
        "get { return bodyCase_ == BodyOneofCase.Image ? (global::Media.Image) body_ : null; }"
    ));
}

#[test]
fn OneofFieldGenerator___scalar_parsing___assigns_property() {
    let output = render(&generator(&text()), |g, p| g.generate_parsing_code(p));

    assert_eq!(output, "Text = input.ReadString();\n");
}

#[test]
fn OneofFieldGenerator___message_parsing___merges_into_sub_builder() {
    let output = render(&generator(&image()), |g, p| g.generate_parsing_code(p));

    assert_eq!(
        output,
        "global::Media.Image subBuilder = new global::Media.Image();\n\
         if (bodyCase_ == BodyOneofCase.Image) {\n\
         \x20 subBuilder.MergeFrom(Image);\n\
         }\n\
         input.ReadMessage(subBuilder);\n\
         Image = subBuilder;\n"
    );
}

#[test]
fn OneofFieldGenerator___serialization___guarded_by_case() {
    let output = render(&generator(&text()), |g, p| g.generate_serialization_code(p));

    assert_eq!(
        output,
        "if (bodyCase_ == BodyOneofCase.Text) {\n  output.WriteRawTag(34);\n  output.WriteString(Text);\n}\n"
    );
}

#[test]
fn OneofFieldGenerator___to_string___prints_shared_storage() {
    let output = render(&generator(&text()), |g, p| g.write_to_string(p));

    assert_eq!(
        output,
        "PrintField(\"text\", bodyCase_ == BodyOneofCase.Text, body_, writer);\n"
    );
}

#[test]
fn OneofFieldGenerator___message_merge_clone_freeze() {
    let generator = generator(&image());

    let merge = render(&generator, |g, p| g.generate_merging_code(p));
    let clone = render(&generator, |g, p| g.generate_cloning_code(p));
    let freeze = render(&generator, |g, p| g.generate_freezing_code(p));

    assert!(merge.contains("if (bodyCase_ != BodyOneofCase.Image) {\n    Image = new global::Media.Image();\n  }"));
    assert!(merge.contains("Image.MergeFrom(other.Image);"));
    assert_eq!(
        clone,
        "if (other.bodyCase_ == BodyOneofCase.Image) {\n  Image = other.Image.Clone();\n}\n"
    );
    assert_eq!(
        freeze,
        "if (bodyCase_ == BodyOneofCase.Image) Image.Freeze();\n"
    );
}

#[test]
fn OneofFieldGenerator___scalar_freeze___emits_nothing() {
    let output = render(&generator(&text()), |g, p| g.generate_freezing_code(p));

    assert!(output.is_empty());
}
