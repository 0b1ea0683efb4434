#![allow(clippy::approx_constant)]

use indexmap::indexmap;
use rstest::rstest;

use super::utils::parse;
use crate::{Key, Map, Value};

fn object<const N: usize>(members: [(&str, Value); N]) -> Value {
    Value::Object(members.into_iter().map(|(k, v)| (Key::from(k), v)).collect())
}

fn string(s: &str) -> Value {
    Value::String(s.into())
}

#[test]
fn empty_containers() {
    assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse("{}").unwrap(), Value::Object(Map::new()));
    assert_eq!(parse(" [ ] ").unwrap(), Value::Array(vec![]));
    assert_eq!(parse("{\n}").unwrap(), Value::Object(Map::new()));
}

#[test]
fn single_member_object() {
    assert_eq!(parse(r#"{"foo":true}"#).unwrap(), object([("foo", Value::Bool(true))]));
}

#[test]
fn nested_array_in_object() {
    let value = parse(r#"{"foo":["bar","buz",false,null,"hoge",{"a":"b"}]}"#).unwrap();
    let expected = object([(
        "foo",
        Value::Array(vec![
            string("bar"),
            string("buz"),
            Value::Bool(false),
            Value::Null,
            string("hoge"),
            object([("a", string("b"))]),
        ]),
    )]);
    assert_eq!(value, expected);
}

#[test]
fn mixed_numbers() {
    let value = parse(r#"{"foo":[1,2,3.14,"hoge",{"a":"b"}]}"#).unwrap();
    let expected = object([(
        "foo",
        Value::Array(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Float(3.14),
            string("hoge"),
            object([("a", string("b"))]),
        ]),
    )]);
    assert_eq!(value, expected);
}

#[rstest]
#[case::ascii_escape(r#""bar\u004aC""#, "barJC")]
#[case::katakana(r#""\u30C6\u30B9\u30C8""#, "テスト")]
#[case::surrounded(r#""abc\u30C6\u30B9\u30C8_!""#, "abcテスト_!")]
#[case::surrogate_pair(r#""abc\uD834\uDD1E""#, "abc\u{1D11E}")]
#[case::lowercase_pair(r#""\ud83d\ude00""#, "\u{1F600}")]
#[case::max_scalar(r#""\uDBFF\uDFFF""#, "\u{10FFFF}")]
#[case::nul(r#""\u0000""#, "\0")]
#[case::short_escapes(r#""\"\\\/\b\f\n\r\t""#, "\"\\/\u{8}\u{c}\n\r\t")]
#[case::raw_unicode("\"テスト\"", "テスト")]
fn string_escapes(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(parse(src).unwrap(), string(expected));
}

#[test]
fn escapes_in_keys() {
    let value = parse(r#"{"f\u006fo":1}"#).unwrap();
    assert_eq!(value.get("foo"), Some(&Value::Int(1)));
}

#[rstest]
#[case("0", Value::Int(0))]
#[case("-0", Value::Int(0))]
#[case("-12", Value::Int(-12))]
#[case("9223372036854775807", Value::Int(i64::MAX))]
#[case("9223372036854775808", Value::Float(9_223_372_036_854_775_808.0))]
#[case("0.5", Value::Float(0.5))]
#[case("1e3", Value::Float(1000.0))]
#[case("1E-1", Value::Float(0.1))]
#[case("-2.5e+2", Value::Float(-250.0))]
fn numbers(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(parse(src).unwrap(), expected);
}

#[rstest]
#[case("true", Value::Bool(true))]
#[case("false", Value::Bool(false))]
#[case("null", Value::Null)]
#[case("\"\"", string(""))]
#[case(" \t\r\n42\n", Value::Int(42))]
fn scalar_documents(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(parse(src).unwrap(), expected);
}

#[test]
fn duplicate_keys_last_wins_first_position() {
    let value = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 2);
    let keys: Vec<_> = map.keys().map(Key::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(value.get("a"), Some(&Value::Int(3)));
}

#[test]
fn member_order_is_preserved() {
    let value = parse(r#"{"z":1,"y":2,"x":3}"#).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().map(Key::as_str).collect();
    assert_eq!(keys, ["z", "y", "x"]);
}

#[test]
fn object_equality_ignores_order() {
    let expected = Value::Object(indexmap! {
        Key::from("b") => Value::Int(2),
        Key::from("a") => Value::Int(1),
    });
    assert_eq!(parse(r#"{"a":1,"b":2}"#).unwrap(), expected);
}

#[test]
fn whitespace_everywhere() {
    let src = " {\n\t\"a\" : [ 1 , { } , [ ] ] ,\r\n \"b\" : null } ";
    let value = parse(src).unwrap();
    assert_eq!(
        value,
        object([
            (
                "a",
                Value::Array(vec![
                    Value::Int(1),
                    Value::Object(Map::new()),
                    Value::Array(vec![])
                ])
            ),
            ("b", Value::Null),
        ])
    );
}

#[test]
fn byte_input() {
    let value = crate::parse(b"[1, \"x\"]".as_slice()).unwrap();
    assert_eq!(value, Value::Array(vec![Value::Int(1), string("x")]));
    let owned: Vec<u8> = br#"{"k":false}"#.to_vec();
    assert_eq!(crate::parse(owned).unwrap(), object([("k", Value::Bool(false))]));
}
