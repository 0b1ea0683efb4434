//! The JSON parser.
//!
//! [`Parser`] holds only configuration; each call to [`Parser::parse`] runs a
//! fresh `Engine` over the input. The engine is an explicit state machine
//! driving a `FrameStack` of open containers, so nesting depth is bounded
//! by the heap and never by the thread stack.
//!
//! # Examples
//!
//! ```rust
//! use jsonsl::{ParseOptions, Parser, Value};
//!
//! let parser = Parser::with_max_depth(8);
//! let value = parser.parse(r#"{"key": [null, true, 2.5]}"#, ParseOptions::default())?;
//! assert_eq!(value.get("key").and_then(|v| v.get_index(2)), Some(&Value::Float(2.5)));
//! # Ok::<(), jsonsl::ParseError>(())
//! ```
#![allow(clippy::single_match_else)]
#![allow(clippy::enum_glob_use)]

mod cursor;
mod escape_buffer;
mod frame;
mod literal_buffer;
mod numbers;

use std::borrow::Cow;

use tracing::{debug, trace};

use self::{
    cursor::Cursor,
    escape_buffer::{
        HIGH_SURROGATES, LOW_SURROGATES, UnicodeEscapeBuffer, combine_surrogates,
        scalar_from_unit,
    },
    frame::{Attached, Frame, FrameStack},
    literal_buffer::{ExpectedLiteralBuffer, Step},
};
use crate::{
    error::{ErrorKind, ParseError, Position},
    key::KeyBuilder,
    options::ParseOptions,
    value::Value,
};

/// A reusable, immutable JSON parser configuration.
///
/// A `Parser` carries no per-parse state, so one instance may serve any
/// number of sequential or concurrent [`parse`](Self::parse) calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    max_depth: Option<usize>,
}

impl Parser {
    /// A parser with no nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// A parser that rejects documents nesting more than `max_depth`
    /// containers.
    ///
    /// A limit of `0` admits scalar documents only.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// The nesting limit, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// An independent parser with the same configuration.
    #[must_use]
    pub const fn duplicate(&self) -> Self {
        Self {
            max_depth: self.max_depth,
        }
    }

    /// Parses exactly one JSON document.
    ///
    /// Leading and trailing whitespace is allowed; anything else after the
    /// document is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found, with its
    /// line, column and byte offset.
    pub fn parse(
        &self,
        input: impl AsRef<[u8]>,
        options: ParseOptions,
    ) -> Result<Value, ParseError> {
        let input = input.as_ref();
        trace!(
            len = input.len(),
            max_depth = ?self.max_depth,
            key_mode = ?options.key_mode,
            "parse start"
        );

        let result = match core::str::from_utf8(input) {
            Ok(src) => Engine::new(src, self.max_depth, options).run(),
            Err(err) => Err(invalid_utf8(input, err.valid_up_to())),
        };

        match &result {
            Ok(_) => trace!("parse complete"),
            Err(err) => debug!(error = %err, category = ?err.category(), "parse failed"),
        }
        result
    }
}

fn invalid_utf8(input: &[u8], valid_up_to: usize) -> ParseError {
    let prefix = input
        .get(..valid_up_to)
        .and_then(|bytes| core::str::from_utf8(bytes).ok())
        .unwrap_or_default();
    let mut cursor = Cursor::new(prefix);
    while !cursor.is_at_end() {
        cursor.bump();
    }
    ParseError::new(ErrorKind::InvalidUtf8, cursor.position())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    /// Just after `{`: a key or `}`.
    ObjectStart,
    /// After a `,` in an object: a key only.
    BeforePropertyName,
    AfterPropertyName,
    BeforePropertyValue,
    /// Just after `[`: a value or `]`.
    ArrayStart,
    BeforeArrayValue,
    AfterPropertyValue,
    AfterArrayValue,
    End,
}

/// Per-call parse state.
struct Engine<'src> {
    cursor: Cursor<'src>,
    frames: FrameStack,
    keys: KeyBuilder,
    max_depth: Option<usize>,
    state: ParseState,
    root: Option<Value>,
}

impl<'src> Engine<'src> {
    fn new(src: &'src str, max_depth: Option<usize>, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(src),
            frames: FrameStack::new(),
            keys: KeyBuilder::new(options.key_mode),
            max_depth,
            state: ParseState::Start,
            root: None,
        }
    }

    fn run(mut self) -> Result<Value, ParseError> {
        use ParseState::*;

        loop {
            self.cursor.skip_whitespace();
            match self.state {
                Start | BeforePropertyValue | BeforeArrayValue => self.parse_value()?,
                ObjectStart => match self.cursor.peek() {
                    Some(b'}') => self.close()?,
                    Some(b'"') => self.parse_key()?,
                    _ => return Err(self.unexpected("string key or '}'")),
                },
                BeforePropertyName => match self.cursor.peek() {
                    Some(b'"') => self.parse_key()?,
                    _ => return Err(self.unexpected("string key")),
                },
                AfterPropertyName => {
                    if !self.cursor.eat(b':') {
                        return Err(self.unexpected("':'"));
                    }
                    self.state = BeforePropertyValue;
                }
                ArrayStart => match self.cursor.peek() {
                    Some(b']') => self.close()?,
                    _ => self.state = BeforeArrayValue,
                },
                AfterPropertyValue => match self.cursor.peek() {
                    Some(b',') => {
                        self.cursor.bump();
                        self.state = BeforePropertyName;
                    }
                    Some(b'}') => self.close()?,
                    _ => return Err(self.unexpected("',' or '}'")),
                },
                AfterArrayValue => match self.cursor.peek() {
                    Some(b',') => {
                        self.cursor.bump();
                        self.state = BeforeArrayValue;
                    }
                    Some(b']') => self.close()?,
                    _ => return Err(self.unexpected("',' or ']'")),
                },
                End => {
                    return match (self.cursor.peek_char(), self.root.take()) {
                        (None, Some(root)) => Ok(root),
                        (None, None) => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
                        (Some(c), _) => Err(self.error(ErrorKind::TrailingContent(c))),
                    };
                }
            }
        }
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.position())
    }

    fn error_at(kind: ErrorKind, position: Position) -> ParseError {
        ParseError::new(kind, position)
    }

    /// Error for a missing delimiter, or end of input if there is none.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.cursor.peek_char() {
            Some(found) => self.error(ErrorKind::Expected { expected, found }),
            None => self.error(ErrorKind::UnexpectedEndOfInput),
        }
    }

    fn parse_value(&mut self) -> Result<(), ParseError> {
        match self.cursor.peek() {
            Some(b'{') => self.open(Frame::new_object_frame(), ParseState::ObjectStart),
            Some(b'[') => self.open(Frame::new_array_frame(), ParseState::ArrayStart),
            Some(b'"') => {
                let text = self.scan_string()?;
                self.complete(Value::String(text.into_owned()))
            }
            Some(b @ (b't' | b'f' | b'n')) => {
                let value = self.scan_literal(b)?;
                self.complete(value)
            }
            Some(b'-' | b'0'..=b'9') => {
                let value = numbers::scan_number(&mut self.cursor)?;
                self.complete(value)
            }
            _ => Err(match self.cursor.peek_char() {
                Some(c) => self.error(ErrorKind::InvalidCharacter(c)),
                None => self.error(ErrorKind::UnexpectedEndOfInput),
            }),
        }
    }

    fn parse_key(&mut self) -> Result<(), ParseError> {
        let text = self.scan_string()?;
        let key = self.keys.build(text);
        self.frames.set_pending_key(key);
        self.state = ParseState::AfterPropertyName;
        Ok(())
    }

    /// Opens a container at the cursor, enforcing the depth limit first.
    fn open(&mut self, frame: Frame, next: ParseState) -> Result<(), ParseError> {
        let depth = self.frames.depth();
        if let Some(max) = self.max_depth.filter(|&max| depth >= max) {
            debug!(max_depth = max, offset = self.cursor.offset(), "nesting limit reached");
            return Err(self.error(ErrorKind::NestingTooDeep(max)));
        }
        self.cursor.bump();
        self.frames.push(frame);
        self.state = next;
        Ok(())
    }

    /// Consumes the closing bracket and completes the innermost container.
    fn close(&mut self) -> Result<(), ParseError> {
        let Some(frame) = self.frames.pop() else {
            return Err(self.unexpected("end of input"));
        };
        self.cursor.bump();
        self.complete(frame.into_value())
    }

    fn complete(&mut self, value: Value) -> Result<(), ParseError> {
        self.state = match self.frames.attach(value) {
            Some(Attached::Root(value)) => {
                self.root = Some(value);
                ParseState::End
            }
            Some(Attached::InArray) => ParseState::AfterArrayValue,
            Some(Attached::InObject) => ParseState::AfterPropertyValue,
            None => return Err(self.unexpected("string key")),
        };
        Ok(())
    }

    fn scan_literal(&mut self, first: u8) -> Result<Value, ParseError> {
        let Some(mut literal) = ExpectedLiteralBuffer::new(first) else {
            return Err(self.unexpected("a value"));
        };
        self.cursor.bump();
        loop {
            let Some(b) = self.cursor.peek() else {
                return Err(self.error(ErrorKind::InvalidLiteral(literal.kind().text())));
            };
            match literal.step(b) {
                Step::NeedMore => self.cursor.bump(),
                Step::Done(value) => {
                    self.cursor.bump();
                    return Ok(value);
                }
                Step::Reject(kind) => return Err(self.error(ErrorKind::InvalidLiteral(kind.text()))),
            }
        }
    }

    /// Scans a string starting at its opening quote.
    ///
    /// Strings without escapes are borrowed straight from the input.
    fn scan_string(&mut self) -> Result<Cow<'src, str>, ParseError> {
        self.cursor.bump();
        let mut start = self.cursor.offset();
        let mut decoded: Option<String> = None;

        loop {
            self.cursor
                .bump_while(|b| b != b'"' && b != b'\\' && b >= 0x20);
            let run = self.cursor.slice_from(start);

            match self.cursor.peek() {
                Some(b'"') => {
                    self.cursor.bump();
                    return Ok(match decoded {
                        None => Cow::Borrowed(run),
                        Some(mut buf) => {
                            buf.push_str(run);
                            Cow::Owned(buf)
                        }
                    });
                }
                Some(b'\\') => {
                    let buf = decoded.get_or_insert_with(String::new);
                    buf.push_str(run);
                    let escape_at = self.cursor.position();
                    self.cursor.bump();
                    let c = self.scan_escape(escape_at)?;
                    buf.push(c);
                    start = self.cursor.offset();
                }
                Some(b) => {
                    return Err(self.error(ErrorKind::ControlCharacter(char::from(b))));
                }
                None => return Err(self.error(ErrorKind::UnterminatedString)),
            }
        }
    }

    /// Decodes the escape after a consumed backslash at `escape_at`.
    fn scan_escape(&mut self, escape_at: Position) -> Result<char, ParseError> {
        let Some(b) = self.cursor.peek() else {
            return Err(self.error(ErrorKind::UnterminatedString));
        };
        let c = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.cursor.bump();
                return self.scan_unicode_escape(escape_at);
            }
            _ => {
                let c = self.cursor.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(self.error(ErrorKind::InvalidEscape(c)));
            }
        };
        self.cursor.bump();
        Ok(c)
    }

    /// Decodes the digits of a `\u` escape, pulling in a second `\uXXXX`
    /// when the first is a high surrogate.
    fn scan_unicode_escape(&mut self, escape_at: Position) -> Result<char, ParseError> {
        let unit = self.scan_code_unit()?;

        if LOW_SURROGATES.contains(&unit) {
            return Err(Self::error_at(ErrorKind::UnpairedSurrogate(unit), escape_at));
        }
        if !HIGH_SURROGATES.contains(&unit) {
            return scalar_from_unit(unit).map_err(|kind| Self::error_at(kind, escape_at));
        }

        if !self.cursor.starts_with(b"\\u") {
            return Err(Self::error_at(ErrorKind::UnpairedSurrogate(unit), escape_at));
        }
        self.cursor.bump();
        self.cursor.bump();
        let low = self.scan_code_unit()?;
        combine_surrogates(unit, low).map_err(|kind| Self::error_at(kind, escape_at))
    }

    fn scan_code_unit(&mut self) -> Result<u16, ParseError> {
        let mut digits = UnicodeEscapeBuffer::new();
        loop {
            let Some(b) = self.cursor.peek() else {
                return Err(self.error(ErrorKind::TruncatedUnicodeEscape));
            };
            match digits.feed(b) {
                Ok(Some(unit)) => {
                    self.cursor.bump();
                    return Ok(unit);
                }
                Ok(None) => self.cursor.bump(),
                Err(_) if b == b'"' => return Err(self.error(ErrorKind::TruncatedUnicodeEscape)),
                Err(_) => {
                    let c = self.cursor.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(self.error(ErrorKind::InvalidUnicodeEscapeChar(c)));
                }
            }
        }
    }
}
