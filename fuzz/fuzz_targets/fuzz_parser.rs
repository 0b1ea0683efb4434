#![no_main]

use arbitrary::Arbitrary;
use jsonsl::{ErrorKind, Key, KeyMode, ParseOptions, Parser, Value};
use libfuzzer_sys::fuzz_target;
use serde_json::Map;

#[derive(Debug, Arbitrary)]
enum Input {
    /// Arbitrary bytes, compared for acceptance against serde_json.
    Raw {
        max_depth: Option<u16>,
        symbol_keys: bool,
        data: Vec<u8>,
    },
    /// A generated document, which must parse back to the same value.
    Document { symbol_keys: bool, value: ArbitraryValue },
}

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(22)?;
        let value = match node_type {
            0 => serde_json::Value::Null,
            1 => serde_json::Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                serde_json::Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => serde_json::Value::Number(u.arbitrary::<i64>()?.into()),
            4..=11 => serde_json::Value::String(u.arbitrary()?),
            12..=16 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                serde_json::Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            17..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                serde_json::Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn options(symbol_keys: bool) -> ParseOptions {
    ParseOptions {
        key_mode: if symbol_keys {
            KeyMode::Symbol
        } else {
            KeyMode::Text
        },
    }
}

fn to_value(value: &serde_json::Value, symbol_keys: bool) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap()),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(|v| to_value(v, symbol_keys)).collect())
        }
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let key = if symbol_keys {
                        Key::Symbol(k.as_str().into())
                    } else {
                        Key::from(k.as_str())
                    };
                    (key, to_value(v, symbol_keys))
                })
                .collect(),
        ),
    }
}

fn raw(max_depth: Option<u16>, symbol_keys: bool, data: &[u8]) {
    let parser = max_depth.map_or_else(Parser::new, |d| Parser::with_max_depth(d.into()));
    let ours = parser.parse(data, options(symbol_keys));

    match (ours, serde_json::from_slice::<serde_json::Value>(data)) {
        (Ok(_), Ok(_)) => {}
        (Err(err), Ok(_)) => {
            assert!(
                matches!(err.kind(), ErrorKind::NestingTooDeep(_)),
                "serde_json accepted input we rejected: {err}"
            );
        }
        // serde_json stops at its own recursion limit
        (Ok(_), Err(err)) => {
            assert!(
                err.to_string().contains("recursion limit"),
                "we accepted input serde_json rejected: {err}"
            );
        }
        (Err(_), Err(_)) => {}
    }
}

fn document(symbol_keys: bool, value: &serde_json::Value) {
    let Ok(src) = serde_json::to_vec(value) else {
        return;
    };
    let parsed = Parser::new()
        .parse(&src, options(symbol_keys))
        .unwrap_or_else(|err| panic!("generated document rejected: {err}"));
    assert_eq!(parsed, to_value(value, symbol_keys));
}

fuzz_target!(|input: Input| match input {
    Input::Raw {
        max_depth,
        symbol_keys,
        data,
    } => raw(max_depth, symbol_keys, &data),
    Input::Document { symbol_keys, value } => document(symbol_keys, &value.0),
});
