#![allow(non_snake_case)]

use super::*;
use fieldgen_core::FieldRef;

fn context() -> VariableContext {
    let mut context = VariableContext::empty(FieldRef::new("Msg", "items"));
    context.insert("name", "items");
    context.insert("type_name", "int");
    context
}

#[test]
fn Printer___substitutes_variables() {
    let mut printer = Printer::new();

    printer
        .print(&context(), "scg::List<$type_name$> _$name$;\n")
        .unwrap();

    assert_eq!(printer.output(), "scg::List<int> _items;\n");
}

#[test]
fn Printer___double_dollar___literal_dollar() {
    let mut printer = Printer::new();

    printer.print(&context(), "cost: $$5 for $name$").unwrap();

    assert_eq!(printer.output(), "cost: $5 for items");
}

#[test]
fn Printer___substituted_value___not_rescanned() {
    let mut context = context();
    context.insert("tricky", "$name$");
    let mut printer = Printer::new();

    printer.print(&context, "$tricky$").unwrap();

    assert_eq!(printer.output(), "$name$");
}

#[test]
fn Printer___unknown_variable___missing_variable_error() {
    let mut printer = Printer::new();

    let err = printer.print(&context(), "$nope$").unwrap_err();

    match err {
        GenerationError::MissingVariable { field, variable } => {
            assert_eq!(field.to_string(), "Msg.items");
            assert_eq!(variable, "nope");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(printer.is_empty());
}

#[test]
fn Printer___unterminated_variable___malformed_template() {
    let mut printer = Printer::new();

    let err = printer.print(&context(), "ok $name$ then $broken").unwrap_err();

    match err {
        GenerationError::MalformedTemplate { template, offset } => {
            assert_eq!(template, "ok $name$ then $broken");
            assert_eq!(offset, 15);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn Printer___indent___prefixes_each_non_empty_line() {
    let mut printer = Printer::new();
    printer.print_raw("class A {\n");
    printer.indent();

    printer.print(&context(), "int _$name$;\n\nint b;\n").unwrap();
    printer.outdent();
    printer.print_raw("}\n");

    assert_eq!(printer.output(), "class A {\n  int _items;\n\n  int b;\n}\n");
}

#[test]
fn Printer___partial_lines___indented_once() {
    let mut printer = Printer::new();
    printer.indent();

    printer.print_raw("a");
    printer.print_raw("b\n");

    assert_eq!(printer.output(), "  ab\n");
}

#[test]
fn Printer___outdent_at_zero___stays_at_zero() {
    let mut printer = Printer::new();

    printer.outdent();
    printer.print_raw("x\n");

    assert_eq!(printer.into_output(), "x\n");
}

#[test]
fn substitute___no_variables___unchanged() {
    assert_eq!(substitute(&context(), "plain text").unwrap(), "plain text");
}
