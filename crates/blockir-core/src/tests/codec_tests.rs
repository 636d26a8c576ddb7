use super::sample_program;
use crate::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn ident(id: &str) -> Value {
    json!({ "_type": "Identifier", "id": id })
}

fn type_ident(id: &str) -> Value {
    json!({ "_type": "TypeIdentifier", "id": id })
}

fn decoded(value: Value) -> Block {
    decode(&value).unwrap().unwrap()
}

#[test]
fn test_null_decodes_to_none() {
    assert_eq!(decode(&Value::Null), Ok(None));
    assert_eq!(codec::encode_opt(None), Value::Null);
}

#[test]
fn test_type_identifier() {
    assert_eq!(decoded(type_ident("x")), Block::from(TypeIdentifier::new("x")));
}

#[test]
fn test_polymorphic_type() {
    let value = json!({
        "_type": "PolymorphicType",
        "id": type_ident("Map"),
        "typevars": [
            { "_type": "TypeArgument", "name": "V", "type": type_ident("String") },
            { "_type": "TypeArgument", "name": "K", "type": type_ident("Integer") },
        ],
    });
    let expected = PolymorphicType::new(
        "Map",
        vec![
            TypeArgument::new("V", "String"),
            TypeArgument::new("K", "Integer"),
        ],
    );
    assert_eq!(decoded(value), Block::from(expected));
}

#[test]
fn test_num_and_str() {
    assert_eq!(
        decoded(json!({ "_type": "Num", "value": "10", "isFloat": true })),
        Block::from(Num::float("10"))
    );
    assert_eq!(
        decoded(json!({ "_type": "Num", "value": "10" })),
        Block::from(Num::int("10"))
    );
    assert_eq!(
        decoded(json!({ "_type": "Str", "value": "10" })),
        Block::from(Str::new("10"))
    );
}

#[test]
fn test_num_digits_are_kept_verbatim() {
    let digits = "123456789012345678901234567890.000000000000000000001";
    let block: Block = Num::float(digits).into();
    let encoded = encode(&block);
    assert_eq!(encoded["value"], json!(digits));
    assert_eq!(decoded(encoded), block);
}

#[test]
fn test_func() {
    let value = json!({
        "_type": "Func",
        "decls": [
            { "_type": "Declaration", "arg": ident("x"), "type": type_ident("y") },
        ],
        "returnType": type_ident("y"),
        "body": { "_type": "Do", "expr": ident("z") },
    });
    let expected = Func::new(vec![Declaration::new("x", "y")], "y", Do::new("z"));
    assert_eq!(decoded(value), Block::from(expected));
}

#[test]
fn test_call_keeps_argument_order() {
    let value = json!({
        "_type": "Call",
        "func": ident("f"),
        "args": [
            { "_type": "Argument", "name": ident("a1"), "value": ident("y") },
            { "_type": "Argument", "name": ident("a0"), "value": ident("x") },
        ],
    });
    let expected = Call::new(
        "f",
        vec![Argument::new("a1", "y"), Argument::new("a0", "x")],
    );
    assert_eq!(decoded(value), Block::from(expected));
}

#[test]
fn test_assign() {
    let value = json!({
        "_type": "Assign",
        "lhs": ident("x"),
        "isDefine": true,
        "rhs": ident("y"),
    });
    assert_eq!(decoded(value), Block::from(Assign::define("x", "y")));
}

#[test]
fn test_branch_with_and_without_default() {
    let case = json!({
        "_type": "Case",
        "cond": ident("cond0"),
        "body": { "_type": "Do", "expr": ident("x") },
    });
    let without = json!({ "_type": "Branch", "cases": [case.clone()], "default": null });
    assert_eq!(
        decoded(without),
        Block::from(Branch::new(vec![Case::new("cond0", Do::new("x"))], None))
    );

    let with = json!({
        "_type": "Branch",
        "cases": [case],
        "default": { "_type": "Default", "body": { "_type": "Do", "expr": ident("z") } },
    });
    assert_eq!(
        decoded(with),
        Block::from(Branch::new(
            vec![Case::new("cond0", Do::new("x"))],
            Some(DefaultCase::new(Do::new("z")))
        ))
    );
}

#[test]
fn test_return() {
    assert_eq!(
        decoded(json!({ "_type": "Return", "value": ident("x") })),
        Block::from(Return::value("x"))
    );
    assert_eq!(
        decoded(json!({ "_type": "Return", "value": null })),
        Block::from(Return::empty())
    );
}

#[test]
fn test_loop_control_and_suite() {
    assert_eq!(decoded(json!({ "_type": "Break" })), Block::Break);
    assert_eq!(decoded(json!({ "_type": "Continue" })), Block::Continue);
    assert_eq!(
        decoded(json!({ "_type": "Suite", "stmts": [{ "_type": "Break" }] })),
        Block::from(Suite::new(vec![Stmt::Break]))
    );
}

#[test]
fn test_round_trip_sample_program() {
    let program = sample_program();
    assert_eq!(decode(&encode(&program)), Ok(Some(program)));
}

#[test]
fn test_round_trip_every_node_kind_on_its_own() {
    let nodes: Vec<Block> = vec![
        TypeIdentifier::new("T").into(),
        TypeArgument::new("K", "T").into(),
        Declaration::new("x", "T").into(),
        Argument::new("a", Num::int("1")).into(),
        Case::new("c", Stmt::Break).into(),
        DefaultCase::new(Stmt::Continue).into(),
        While::new("c", Suite::new(vec![])).into(),
        Foreach::new("x", "xs", Do::new(Str::new("a\"b\\c\n"))).into(),
    ];
    for node in nodes {
        assert_eq!(decode(&encode(&node)), Ok(Some(node.clone())), "{}", node.kind());
    }
}

#[test]
fn test_encoding_is_canonical() {
    let call: Block = Call::new("f", vec![Argument::new("a0", "x")]).into();
    assert_eq!(
        encode(&call),
        json!({
            "_type": "Call",
            "func": ident("f"),
            "args": [{ "_type": "Argument", "name": ident("a0"), "value": ident("x") }],
        })
    );
}

#[test]
fn test_serde_goes_through_codec() {
    let program = sample_program();
    let text = serde_json::to_string(&program).unwrap();
    let back: Block = serde_json::from_str(&text).unwrap();
    assert_eq!(back, program);

    let absent: Option<Block> = serde_json::from_str("null").unwrap();
    assert_eq!(absent, None);
}

#[test]
fn test_json_string_helpers() {
    let program = sample_program();
    let text = codec::to_json_string(&program).unwrap();
    assert_eq!(codec::from_json_str(&text), Ok(Some(program)));
    assert!(matches!(
        codec::from_json_str("{ not json"),
        Err(FormatError::Syntax(_))
    ));
}

#[test]
fn test_unknown_kind_keeps_raw_value() {
    let value = json!({ "_type": "Goto", "label": "l" });
    let err = decode(&value).unwrap_err();
    assert_eq!(err, FormatError::UnknownKind { value: value.clone() });
    assert_eq!(err.value(), Some(&value));
    assert!(err.to_string().contains("Goto"));
}

#[test]
fn test_missing_tag_is_unknown_kind() {
    let value = json!({ "id": "x" });
    assert!(matches!(decode(&value), Err(FormatError::UnknownKind { .. })));
    assert!(matches!(decode(&json!(3)), Err(FormatError::UnknownKind { .. })));
}

#[test]
fn test_missing_field() {
    let value = json!({ "_type": "Do" });
    assert_eq!(
        decode(&value),
        Err(FormatError::MissingField {
            kind: "Do",
            field: "expr",
            value,
        })
    );
}

#[test]
fn test_invalid_field() {
    let value = json!({ "_type": "Num", "value": 10 });
    assert!(matches!(
        decode(&value),
        Err(FormatError::InvalidField { kind: "Num", field: "value", .. })
    ));
}

#[test]
fn test_wrong_category() {
    let value = json!({ "_type": "Do", "expr": { "_type": "Break" } });
    match decode(&value) {
        Err(FormatError::WrongCategory { expected, found, .. }) => {
            assert_eq!(expected, "Expression");
            assert_eq!(found, "Break");
        }
        other => panic!("expected a category error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_typevar_is_rejected() {
    let value = json!({
        "_type": "PolymorphicType",
        "id": type_ident("Map"),
        "typevars": [
            { "_type": "TypeArgument", "name": "K", "type": type_ident("A") },
            { "_type": "TypeArgument", "name": "K", "type": type_ident("B") },
        ],
    });
    assert!(matches!(
        decode(&value),
        Err(FormatError::DuplicateName { name, .. }) if name == "K"
    ));
}

#[test]
fn test_legacy_loop_kind() {
    let value = json!({
        "_type": "Loop",
        "id": ident("x"),
        "iterable": ident("xs"),
        "body": { "_type": "Do", "expr": ident("z") },
    });
    let block = decoded(value);
    assert_eq!(block, Block::from(Foreach::new("x", "xs", Do::new("z"))));
    assert_eq!(encode(&block)["_type"], json!("Foreach"));
}

#[test]
fn test_legacy_keyed_lists_are_upgraded_in_document_order() {
    let call = json!({
        "_type": "Call",
        "func": ident("f"),
        "args": { "a1": ident("y"), "a0": ident("x") },
    });
    let expected: Block = Call::new(
        "f",
        vec![Argument::new("a1", "y"), Argument::new("a0", "x")],
    )
    .into();
    let block = decoded(call);
    assert_eq!(block, expected);
    assert!(encode(&block)["args"].is_array());

    let ty = json!({
        "_type": "PolymorphicType",
        "id": type_ident("Map"),
        "typevars": { "V": type_ident("String"), "K": type_ident("Integer") },
    });
    assert_eq!(
        decoded(ty),
        Block::from(PolymorphicType::new(
            "Map",
            vec![
                TypeArgument::new("V", "String"),
                TypeArgument::new("K", "Integer"),
            ],
        ))
    );
}
