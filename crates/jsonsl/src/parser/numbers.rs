use super::cursor::Cursor;
use crate::{
    error::{ErrorKind, ParseError},
    value::Value,
};

/// Scans a number literal starting at `-` or a digit.
///
/// Literals with a fraction or exponent become [`Value::Float`]; others
/// become [`Value::Int`] unless they overflow `i64`, in which case they are
/// widened to a float.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let start = cursor.offset();
    let start_pos = cursor.position();
    let mut is_float = false;

    cursor.eat(b'-');

    match cursor.peek() {
        Some(b'0') => {
            cursor.bump();
            if cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(invalid(cursor, "leading zeros are not allowed"));
            }
        }
        Some(b'1'..=b'9') => cursor.bump_while(|b| b.is_ascii_digit()),
        _ => return Err(invalid(cursor, "expected digit after '-'")),
    }

    if cursor.eat(b'.') {
        is_float = true;
        expect_digits(cursor, "expected digit after decimal point")?;
    }

    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        cursor.bump();
        is_float = true;
        if matches!(cursor.peek(), Some(b'+' | b'-')) {
            cursor.bump();
        }
        expect_digits(cursor, "expected digit in exponent")?;
    }

    let text = cursor.slice_from(start);
    let out_of_range = || ParseError::new(ErrorKind::NumberOutOfRange, start_pos);

    if !is_float {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Int(n));
        }
    }

    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Float(n)),
        _ => Err(out_of_range()),
    }
}

fn expect_digits(cursor: &mut Cursor<'_>, msg: &'static str) -> Result<(), ParseError> {
    if !cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
        return Err(invalid(cursor, msg));
    }
    cursor.bump_while(|b| b.is_ascii_digit());
    Ok(())
}

fn invalid(cursor: &Cursor<'_>, msg: &'static str) -> ParseError {
    ParseError::new(ErrorKind::InvalidNumber(msg), cursor.position())
}
