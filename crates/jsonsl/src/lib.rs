//! A strict JSON parser with a configurable nesting limit.
//!
//! `jsonsl` turns one JSON document into a [`Value`] tree. It validates
//! `\uXXXX` escapes strictly, combining UTF-16 surrogate pairs and rejecting
//! malformed or unpaired escapes, and can bound the container nesting depth
//! of a document so that hostile input fails with
//! [`ErrorKind::NestingTooDeep`] instead of exhausting resources.
//!
//! ```rust
//! use jsonsl::{ErrorKind, Parser, ParseOptions};
//!
//! let value = jsonsl::parse(r#"{"foo": ["bar", 1, 2.5, null]}"#)?;
//! assert_eq!(value.get("foo").and_then(|v| v.get_index(0)).and_then(|v| v.as_str()), Some("bar"));
//!
//! let strict = Parser::with_max_depth(1);
//! let err = strict.parse("[[]]", ParseOptions::default()).unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::NestingTooDeep(1));
//! # Ok::<(), jsonsl::ParseError>(())
//! ```

mod error;
mod key;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorCategory, ErrorKind, ParseError};
pub use key::{Key, KeyMode, Symbol};
pub use options::ParseOptions;
pub use parser::Parser;
pub use value::{Array, Map, Value};

/// Parses `input` with an unbounded parser and default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not exactly one valid JSON
/// document.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParseError> {
    Parser::new().parse(input, ParseOptions::default())
}

/// Parses `input` with an unbounded parser and the given options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not exactly one valid JSON
/// document.
pub fn parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParseOptions,
) -> Result<Value, ParseError> {
    Parser::new().parse(input, options)
}
