//! Month abbreviations.

use time::Month;

/// Decode a three letter month abbreviation.
///
/// Only as many bytes as are needed to tell the twelve names apart are
/// inspected. The token must be one of `Jan`, `Feb`, `Mar`, `Apr`, `May`,
/// `Jun`, `Jul`, `Aug`, `Sep`, `Oct`, `Nov` or `Dec`; the date patterns only
/// ever capture those.
pub fn from_abbreviation(token: &[u8]) -> Month {
    debug_assert_eq!(token.len(), 3);
    match token[0] {
        // Apr, Aug
        b'A' => {
            if token[1] == b'p' {
                Month::April
            } else {
                Month::August
            }
        }
        b'D' => Month::December,
        b'F' => Month::February,
        // Jan, Jun, Jul
        b'J' => {
            if token[1] == b'a' {
                Month::January
            } else if token[2] == b'n' {
                Month::June
            } else {
                Month::July
            }
        }
        // Mar, May
        b'M' => {
            if token[2] == b'r' {
                Month::March
            } else {
                Month::May
            }
        }
        b'N' => Month::November,
        b'O' => Month::October,
        b'S' => Month::September,
        _ => unreachable!("month abbreviation was not matched by a date pattern"),
    }
}
