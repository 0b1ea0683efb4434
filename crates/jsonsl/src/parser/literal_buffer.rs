use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedLiteralValue {
    Null,
    True,
    False,
}

impl ExpectedLiteralValue {
    pub fn text(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
        }
    }

    fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
        }
    }
}

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, PartialEq)]
pub enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done(Value),
    /// Byte did **not** match the expected byte.
    Reject(ExpectedLiteralValue),
}

/// `(remaining_bytes, literal_kind)` while matching `true`, `false` or `null`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExpectedLiteralBuffer(&'static [u8], ExpectedLiteralValue);

impl ExpectedLiteralBuffer {
    /// Start matching after the *first* byte (`n`, `t`, or `f`).
    pub fn new(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self(b"ull", ExpectedLiteralValue::Null)),
            b't' => Some(Self(b"rue", ExpectedLiteralValue::True)),
            b'f' => Some(Self(b"alse", ExpectedLiteralValue::False)),
            _ => None,
        }
    }

    pub fn kind(&self) -> ExpectedLiteralValue {
        self.1
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub fn step(&mut self, b: u8) -> Step {
        match self.0.split_first() {
            Some((expected, rest)) if *expected == b => {
                self.0 = rest;
                if rest.is_empty() {
                    Step::Done(self.1.value())
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject(self.1),
        }
    }
}
