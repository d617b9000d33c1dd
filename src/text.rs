//! Header text and the byte classes used to scan it.
//!
//! Header values arrive either as `str` or as raw bytes straight off the
//! wire. Everything in this crate only ever splits on ASCII bytes, so a
//! slice of a `str` taken at one of those positions is still valid UTF-8.

use std::ops::Range;

/// Text that a header value can be read from.
///
/// Implemented for `str` and `[u8]`. Items handed back to callers have the
/// same type as the input they were taken from.
pub trait HeaderText {
    /// The raw bytes of the text.
    fn as_bytes(&self) -> &[u8];

    /// Borrow a sub-range of the text.
    ///
    /// `range` must start and end next to an ASCII byte (or at either end of
    /// the text).
    fn slice(&self, range: Range<usize>) -> &Self;
}

impl HeaderText for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    fn slice(&self, range: Range<usize>) -> &str {
        &self[range]
    }
}

impl HeaderText for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn slice(&self, range: Range<usize>) -> &[u8] {
        &self[range]
    }
}

/// Byte is whitespace in the C locale.
///
/// ```text
/// space = SP / HTAB / LF / VT / FF / CR
/// ```
///
/// Unlike [`u8::is_ascii_whitespace`] this includes the vertical tab.
pub fn is_space(byte: u8) -> bool {
    match byte {
        b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => true,
        _ => false,
    }
}

/// Byte is a [RFC5234](https://tools.ietf.org/html/rfc5234) DIGIT.
///
/// ```text
/// DIGIT = %x30-39 ; 0-9
/// ```
pub fn is_digit(byte: u8) -> bool {
    byte >= b'0' && byte <= b'9'
}

/// Collect a prefix from a slice matching a character set.
pub fn collect_matching<T>(source: &[u8], test: T) -> &[u8]
where
    T: Fn(u8) -> bool,
{
    let len = source.iter().take_while(|&&byte| test(byte)).count();
    &source[..len]
}
