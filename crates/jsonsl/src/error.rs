use thiserror::Error;

/// Error returned when a document cannot be parsed.
///
/// Carries the cause together with the position of the offending input.
/// `line` and `column` are 1-based and count characters, `offset` is the
/// 0-based byte offset into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    #[source]
    pub(crate) kind: ErrorKind,
    /// 1-based line of the offending input.
    pub line: usize,
    /// 1-based column (in characters) of the offending input.
    pub column: usize,
    /// 0-based byte offset of the offending input.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
            offset: position.offset,
        }
    }

    /// The specific cause of the failure.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Coarse classification of the failure.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// The cause of a [`ParseError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input ended before the document was complete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A character that cannot start a value.
    #[error("invalid character '{}'", .0.escape_debug())]
    InvalidCharacter(char),
    /// A structural delimiter or key was expected.
    #[error("expected {expected}, found '{}'", .found.escape_debug())]
    Expected {
        /// Human readable description of what was expected.
        expected: &'static str,
        /// The character found instead.
        found: char,
    },
    /// A bare word that is not `true`, `false` or `null`.
    #[error("invalid literal, expected `{0}`")]
    InvalidLiteral(&'static str),
    /// A number that does not follow the JSON grammar.
    #[error("invalid number: {0}")]
    InvalidNumber(&'static str),
    /// A number that does not fit a finite `f64`.
    #[error("number out of range")]
    NumberOutOfRange,
    /// Input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// An unescaped control character inside a string.
    #[error("unescaped control character {} in string", .0.escape_unicode())]
    ControlCharacter(char),
    /// A backslash followed by a character with no escape meaning.
    #[error("invalid escape character '{}'", .0.escape_debug())]
    InvalidEscape(char),
    /// A non-hexadecimal character inside a `\u` escape.
    #[error("invalid unicode escape character '{}'", .0.escape_debug())]
    InvalidUnicodeEscapeChar(char),
    /// A `\u` escape with fewer than four hexadecimal digits.
    #[error("truncated unicode escape sequence")]
    TruncatedUnicodeEscape,
    /// A UTF-16 surrogate escape without its partner.
    #[error("unpaired surrogate in unicode escape \\u{0:04X}")]
    UnpairedSurrogate(u16),
    /// Content after the complete top-level value.
    #[error("unexpected trailing character '{}'", .0.escape_debug())]
    TrailingContent(char),
    /// The document nests deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    NestingTooDeep(usize),
    /// The input is not valid UTF-8.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
}

/// Coarse classification of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unexpected token, missing delimiter, bad literal or number.
    Syntax,
    /// Input ended inside a string or container.
    Unterminated,
    /// Malformed escape sequence, including unpaired surrogates.
    InvalidEscape,
    /// Bytes following a complete top-level value.
    TrailingContent,
    /// The nesting limit was exceeded.
    NestingTooDeep,
}

impl ErrorKind {
    /// Coarse classification of this failure.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedEndOfInput | Self::UnterminatedString => ErrorCategory::Unterminated,
            Self::InvalidEscape(_)
            | Self::InvalidUnicodeEscapeChar(_)
            | Self::TruncatedUnicodeEscape
            | Self::UnpairedSurrogate(_) => ErrorCategory::InvalidEscape,
            Self::TrailingContent(_) => ErrorCategory::TrailingContent,
            Self::NestingTooDeep(_) => ErrorCategory::NestingTooDeep,
            Self::InvalidCharacter(_)
            | Self::Expected { .. }
            | Self::InvalidLiteral(_)
            | Self::InvalidNumber(_)
            | Self::NumberOutOfRange
            | Self::ControlCharacter(_)
            | Self::InvalidUtf8 => ErrorCategory::Syntax,
        }
    }
}

/// A location in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub(crate) const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = ParseError::new(
            ErrorKind::InvalidEscape('!'),
            Position {
                offset: 12,
                line: 1,
                column: 13,
            },
        );
        assert_eq!(err.to_string(), "invalid escape character '!' at 1:13");
        assert_eq!(err.offset, 12);
    }

    #[test]
    fn source_is_the_kind() {
        let err = ParseError::new(ErrorKind::NestingTooDeep(3), Position::START);
        let source = core::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("nesting depth exceeds the limit of 3"));
    }

    #[test]
    fn control_characters_are_escaped_in_messages() {
        assert_eq!(
            ErrorKind::ControlCharacter('\n').to_string(),
            "unescaped control character \\u{a} in string"
        );
        assert_eq!(
            ErrorKind::UnpairedSurrogate(0xD834).to_string(),
            "unpaired surrogate in unicode escape \\uD834"
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            ErrorKind::UnpairedSurrogate(0xDC00).category(),
            ErrorCategory::InvalidEscape
        );
        assert_eq!(
            ErrorKind::UnterminatedString.category(),
            ErrorCategory::Unterminated
        );
        assert_eq!(ErrorKind::InvalidUtf8.category(), ErrorCategory::Syntax);
        assert_eq!(
            ErrorKind::TrailingContent('}').category(),
            ErrorCategory::TrailingContent
        );
    }
}
