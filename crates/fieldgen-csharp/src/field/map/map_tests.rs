#![allow(non_snake_case)]

use super::*;
use fieldgen_core::{FieldType, GeneratorOptions, MapEntry};

fn generator(schema: &FieldSchema) -> MapFieldGenerator {
    let context = VariableContext::build(schema, &GeneratorOptions::default()).unwrap();
    MapFieldGenerator::new(context, schema)
}

fn render(
    generator: &MapFieldGenerator,
    op: fn(&MapFieldGenerator, &mut Printer) -> GenerationResult<()>,
) -> String {
    let mut printer = Printer::new();
    op(generator, &mut printer).unwrap();
    printer.into_output()
}

fn scores() -> FieldSchema {
    FieldSchema::new("scores", 3, FieldType::Message, "Board").with_map_entry(MapEntry {
        key: FieldType::String,
        value: FieldType::Int32,
        value_type_name: None,
    })
}

fn players() -> FieldSchema {
    FieldSchema::new("players", 4, FieldType::Message, "Board").with_map_entry(MapEntry {
        key: FieldType::Int64,
        value: FieldType::Message,
        value_type_name: Some("global::Game.Player".to_string()),
    })
}

#[test]
fn MapFieldGenerator___members___codec_and_dictionary() {
    let output = render(&generator(&scores()), |g, p| g.generate_members(p));

    assert_eq!(
        output,
        "private static readonly pbc::MapField<string, int>.Codec _map_scores_codec\n\
         \x20   = new pbc::MapField<string, int>.Codec(pb::FieldCodec.ForString(10), pb::FieldCodec.ForInt32(16), 26);\n\
         private scg::Dictionary<string, int> _scores = new scg::Dictionary<string, int>();\n\
         public scg::Dictionary<string, int> Scores {\n\
         \x20 get { return _scores; }\n\
         }\n"
    );
}

#[test]
fn MapFieldGenerator___merging___overwrites_by_key() {
    let output = render(&generator(&scores()), |g, p| g.generate_merging_code(p));

    assert_eq!(
        output,
        "foreach (var entry in other._scores) {\n  _scores[entry.Key] = entry.Value;\n}\n"
    );
}

#[test]
fn MapFieldGenerator___wire_and_comparison_fragments() {
    let generator = generator(&scores());

    assert_eq!(
        render(&generator, |g, p| g.generate_parsing_code(p)),
        "pbc::MapField<string, int>.AddEntriesFrom(_scores, input, _map_scores_codec);\n"
    );
    assert_eq!(
        render(&generator, |g, p| g.generate_serialization_code(p)),
        "pbc::MapField<string, int>.WriteTo(_scores, output, _map_scores_codec);\n"
    );
    assert_eq!(
        render(&generator, |g, p| g.generate_serialized_size_code(p)),
        "size += pbc::MapField<string, int>.CalculateSize(_scores, _map_scores_codec);\n"
    );
    assert_eq!(
        render(&generator, |g, p| g.write_hash(p)),
        "hash ^= pbc::MapField<string, int>.GetHashCode(_scores);\n"
    );
    assert_eq!(
        render(&generator, |g, p| g.write_equals(p)),
        "if (!pbc::MapField<string, int>.Equals(_scores, other._scores)) return false;\n"
    );
    assert_eq!(
        render(&generator, |g, p| g.write_to_string(p)),
        "PrintField(\"scores\", _scores, writer);\n"
    );
}

#[test]
fn MapFieldGenerator___scalar_values___shallow_clone_no_freeze() {
    let generator = generator(&scores());

    assert_eq!(
        render(&generator, |g, p| g.generate_cloning_code(p)),
        "_scores = new scg::Dictionary<string, int>(other._scores);\n"
    );
    assert!(render(&generator, |g, p| g.generate_freezing_code(p)).is_empty());
}

#[test]
fn MapFieldGenerator___message_values___deep_clone_and_freeze() {
    let generator = generator(&players());

    let clone = render(&generator, |g, p| g.generate_cloning_code(p));
    let freeze = render(&generator, |g, p| g.generate_freezing_code(p));

    assert!(clone.contains("_players.Add(entry.Key, entry.Value != null ? entry.Value.Clone() : null);"));
    assert_eq!(
        freeze,
        "foreach (var entry in _players) {\n  if (entry.Value != null) entry.Value.Freeze();\n}\n"
    );
}

#[test]
fn MapFieldGenerator___message_values___message_value_codec() {
    let output = render(&generator(&players()), |g, p| g.generate_members(p));

    assert!(output.contains(
        "new pbc::MapField<long, global::Game.Player>.Codec(pb::FieldCodec.ForInt64(8), pb::FieldCodec.ForMessage(18, global::Game.Player.Parser), 34)"
    ));
}

#[test]
fn MapFieldGenerator___extension___emits_nothing() {
    let output = render(&generator(&scores()), |g, p| g.generate_extension_code(p));

    assert!(output.is_empty());
}
