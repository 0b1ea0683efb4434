use crate::error::Position;

/// Byte cursor over validated UTF-8 input, tracking line and column.
#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: Position,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: Position::START,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos.offset
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos.offset).copied()
    }

    /// The full character at the cursor, for error messages.
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.src.get(self.pos.offset..)?.chars().next()
    }

    #[inline]
    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.src.as_bytes()[self.pos.offset..].starts_with(prefix)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos.offset >= self.src.len()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        let Some(b) = self.peek() else {
            return;
        };
        self.pos.offset += 1;
        if b == b'\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else if b & 0xC0 != 0x80 {
            // continuation bytes belong to the column of their lead byte
            self.pos.column += 1;
        }
    }

    /// Consumes `b` if it is the next byte.
    #[inline]
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds; the predicate must reject `\n`.
    #[inline]
    pub(crate) fn bump_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.bump();
        }
    }

    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.bump();
        }
    }

    /// Input between `start` and the cursor.
    ///
    /// Callers only pass offsets that sit on ASCII bytes, so the slice is
    /// always on character boundaries.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        self.src.get(start..self.pos.offset).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_lines_and_columns() {
        let mut cursor = Cursor::new("a\nbc");
        cursor.bump();
        cursor.bump();
        assert_eq!(
            cursor.position(),
            Position {
                offset: 2,
                line: 2,
                column: 1
            }
        );
        cursor.bump();
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn columns_count_characters() {
        let mut cursor = Cursor::new("テx");
        for _ in 0..3 {
            cursor.bump();
        }
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.position().column, 2);
        assert_eq!(cursor.peek_char(), Some('x'));
    }

    #[test]
    fn whitespace_is_the_json_four() {
        let mut cursor = Cursor::new(" \t\r\n\u{a0}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek_char(), Some('\u{a0}'));
    }

    #[test]
    fn bump_at_end_is_a_no_op() {
        let mut cursor = Cursor::new("");
        cursor.bump();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), Position::START);
    }
}
