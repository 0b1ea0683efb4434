use std::fmt::Write;

use crate::{ParseError, ParseOptions, Parser, Value};

/// Minified JSON text for `value`, with strings escaped by `serde_json`.
pub(crate) fn to_json(value: &Value) -> String {
    let mut out = String::new();
    write_json(&mut out, value);
    out
}

fn write_json(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        // `Debug` keeps a fraction or exponent so the number reads back as a float.
        Value::Float(n) => {
            let _ = write!(out, "{n:?}");
        }
        Value::String(s) => write_str(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, key.as_str());
                out.push(':');
                write_json(out, item);
            }
            out.push('}');
        }
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push_str(&serde_json::to_string(s).unwrap());
}

pub(crate) fn parse(src: &str) -> Result<Value, ParseError> {
    Parser::new().parse(src, ParseOptions::default())
}

/// Asserts that `err` renders with `expected_sub` and sits at `line:col`.
#[track_caller]
pub(crate) fn assert_err_contains(err: &ParseError, expected_sub: &str, line: usize, col: usize) {
    let s = err.to_string();
    assert!(s.contains(expected_sub), "expected substring {expected_sub:?} in {s:?}");
    assert_eq!(err.line, line, "line of {s:?}");
    assert_eq!(err.column, col, "column of {s:?}");
}

/// `[[[ ... 0 ... ]]]` with `depth` brackets.
pub(crate) fn nested_arrays(depth: usize) -> String {
    let mut s = "[".repeat(depth);
    s.push('0');
    s.push_str(&"]".repeat(depth));
    s
}

pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}
