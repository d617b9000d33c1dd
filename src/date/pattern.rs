//! Fixed grammars for the three HTTP-date formats.
//!
//! ```text
//! rfc1123-date = wkday "," SP 2DIGIT SP month SP 4DIGIT SP time SP "GMT"
//! rfc1036-date = weekday "," SP 2DIGIT "-" month "-" 2DIGIT SP time SP "GMT"
//! asctime-date = wkday SP month SP ( 2DIGIT / ( SP 1DIGIT ) ) SP time SP 4DIGIT
//! time         = 2DIGIT ":" 2DIGIT ":" 2DIGIT
//! ```
//!
//! The grammars are static tables, so matching never builds any state of its
//! own and they can be shared between threads freely.

use crate::text::{collect_matching, is_digit};

/// A part of the timestamp captured from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

const FIELD_COUNT: usize = 6;

/// One step of a date grammar.
#[derive(Debug)]
pub enum Token {
    /// Exactly these bytes.
    Literal(&'static [u8]),
    /// Any one of these names. Not captured.
    Name(&'static [&'static [u8]]),
    /// A month abbreviation, captured as [`Field::Month`].
    Month,
    /// Exactly this many digits.
    Digits(Field, usize),
    /// Two digits, or a space then one digit. The space is not captured.
    PaddedDigits(Field),
}

/// `wkday` in RFC 2616.
pub const SHORT_WEEKDAYS: &[&[u8]] = &[b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat", b"Sun"];

/// `weekday` in RFC 2616.
pub const LONG_WEEKDAYS: &[&[u8]] = &[
    b"Monday",
    b"Tuesday",
    b"Wednesday",
    b"Thursday",
    b"Friday",
    b"Saturday",
    b"Sunday",
];

/// `month` in RFC 2616, in calendar order.
pub const MONTHS: &[&[u8]] = &[
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov", b"Dec",
];

/// `Sun, 06 Nov 1994 08:49:37 GMT`
pub static RFC1123: &[Token] = &[
    Token::Name(SHORT_WEEKDAYS),
    Token::Literal(b", "),
    Token::Digits(Field::Day, 2),
    Token::Literal(b" "),
    Token::Month,
    Token::Literal(b" "),
    Token::Digits(Field::Year, 4),
    Token::Literal(b" "),
    Token::Digits(Field::Hour, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Minute, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Second, 2),
    Token::Literal(b" GMT"),
];

/// `Sunday, 06-Nov-94 08:49:37 GMT`
pub static RFC1036: &[Token] = &[
    Token::Name(LONG_WEEKDAYS),
    Token::Literal(b", "),
    Token::Digits(Field::Day, 2),
    Token::Literal(b"-"),
    Token::Month,
    Token::Literal(b"-"),
    Token::Digits(Field::Year, 2),
    Token::Literal(b" "),
    Token::Digits(Field::Hour, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Minute, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Second, 2),
    Token::Literal(b" GMT"),
];

/// `Sun Nov  6 08:49:37 1994`
pub static ASCTIME: &[Token] = &[
    Token::Name(SHORT_WEEKDAYS),
    Token::Literal(b" "),
    Token::Month,
    Token::Literal(b" "),
    Token::PaddedDigits(Field::Day),
    Token::Literal(b" "),
    Token::Digits(Field::Hour, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Minute, 2),
    Token::Literal(b":"),
    Token::Digits(Field::Second, 2),
    Token::Literal(b" "),
    Token::Digits(Field::Year, 4),
];

/// The fields captured by a successful match, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'s> {
    fields: [&'s [u8]; FIELD_COUNT],
}

impl<'s> Captures<'s> {
    /// The bytes captured for a field.
    pub fn get(&self, field: Field) -> &'s [u8] {
        self.fields[field as usize]
    }
}

/// Match the whole of `text` against a grammar.
pub fn match_pattern<'s>(pattern: &[Token], text: &'s [u8]) -> Option<Captures<'s>> {
    let empty: &'s [u8] = &[];
    let mut fields = [empty; FIELD_COUNT];
    let mut rest = text;

    for token in pattern {
        rest = match *token {
            Token::Literal(literal) => rest.strip_prefix(literal)?,
            Token::Name(names) => names.iter().find_map(|name| rest.strip_prefix(*name))?,
            Token::Month => {
                let tail = MONTHS.iter().find_map(|month| rest.strip_prefix(*month))?;
                fields[Field::Month as usize] = &rest[..rest.len() - tail.len()];
                tail
            }
            Token::Digits(field, width) => {
                // Every digit run is followed by a non-digit or the end of
                // the text, so a longer run can never match.
                let digits = collect_matching(rest, is_digit);
                if digits.len() != width {
                    return None;
                }
                fields[field as usize] = digits;
                &rest[width..]
            }
            Token::PaddedDigits(field) => match *rest {
                [b' ', units, ..] if is_digit(units) => {
                    fields[field as usize] = &rest[1..2];
                    &rest[2..]
                }
                [tens, units, ..] if is_digit(tens) && is_digit(units) => {
                    fields[field as usize] = &rest[..2];
                    &rest[2..]
                }
                _ => return None,
            },
        };
    }

    if rest.is_empty() {
        Some(Captures { fields })
    } else {
        None
    }
}
