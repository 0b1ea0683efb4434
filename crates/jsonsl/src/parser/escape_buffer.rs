//! Decoding of four-digit `\uXXXX` escapes and UTF-16 surrogate pairs.
//!
//! The [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit as they arrive. A
//! code unit is not always a character: high surrogates must be combined
//! with a following low surrogate via [`combine_surrogates`], and a
//! surrogate on its own is rejected by [`scalar_from_unit`].

use crate::error::ErrorKind;

pub(crate) const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
pub(crate) const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some(u16::from(b - b'0')),
            b'a'..=b'f' => Some(u16::from(b - b'a') + 10),
            b'A'..=b'F' => Some(u16::from(b - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one hexadecimal digit.
    ///
    /// - Returns `Ok(None)` while fewer than four digits have been fed.
    /// - Returns `Ok(Some(unit))` on the fourth digit and resets.
    /// - Returns `Err` if `b` is not a hex digit; the buffer is unchanged.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, ErrorKind> {
        let d = Self::hex_val(b).ok_or(ErrorKind::InvalidUnicodeEscapeChar(char::from(b)))?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}

/// Converts a code unit outside the surrogate ranges into a `char`.
pub(crate) fn scalar_from_unit(unit: u16) -> Result<char, ErrorKind> {
    char::from_u32(u32::from(unit)).ok_or(ErrorKind::UnpairedSurrogate(unit))
}

/// Combines a high and a low surrogate into one scalar value.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Result<char, ErrorKind> {
    if !HIGH_SURROGATES.contains(&high) {
        return Err(ErrorKind::UnpairedSurrogate(high));
    }
    if !LOW_SURROGATES.contains(&low) {
        return Err(ErrorKind::UnpairedSurrogate(high));
    }
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).ok_or(ErrorKind::UnpairedSurrogate(high))
}
