//! Comma separated header values.
//!
//! ```text
//! #element => [ element ] *( OWS "," OWS [ element ] )
//! OWS      = *( SP / HTAB )
//! ```
//!
//! Items are borrowed straight out of the header value with the whitespace
//! around them trimmed off. Items that are empty once trimmed are skipped.
//! Commas inside quoted strings are not treated specially.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::text::{collect_matching, is_space, HeaderText};

/// Iterator over the items of a comma separated header value.
#[derive(Debug)]
pub struct Items<'s, T: ?Sized + 's> {
    source: &'s T,
    /// Where the next item starts. `None` once the last comma has been passed.
    position: Option<usize>,
}

impl<'s, T: ?Sized> Clone for Items<'s, T> {
    fn clone(&self) -> Items<'s, T> {
        Items {
            source: self.source,
            position: self.position,
        }
    }
}

impl<'s, T: HeaderText + ?Sized> Items<'s, T> {
    /// Create a new iterator over a header value.
    pub fn new(header_value: &'s T) -> Items<'s, T> {
        Items {
            source: header_value,
            position: Some(0),
        }
    }
}

impl<'s, T: HeaderText + ?Sized> Iterator for Items<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        let bytes = self.source.as_bytes();
        while let Some(start) = self.position {
            let end = bytes[start..]
                .iter()
                .position(|&byte| byte == b',')
                .map_or(bytes.len(), |offset| start + offset);

            // Always step past the comma, or a trailing one would be
            // scanned forever.
            self.position = if end < bytes.len() {
                Some(end + 1)
            } else {
                None
            };

            let item = trim(bytes, start..end);
            if !item.is_empty() {
                return Some(self.source.slice(item));
            }
        }
        None
    }
}

impl<'s, T: HeaderText + ?Sized> FusedIterator for Items<'s, T> {}

/// Narrow a range of `bytes` until it neither starts nor ends with space.
fn trim(bytes: &[u8], range: Range<usize>) -> Range<usize> {
    let first = range.start + collect_matching(&bytes[range.clone()], is_space).len();
    let last = bytes[first..range.end]
        .iter()
        .rposition(|&byte| !is_space(byte))
        .map_or(first, |offset| first + offset + 1);
    first..last
}

/// Iterate over the trimmed, non-empty items of a header value.
pub fn items<T: HeaderText + ?Sized>(header_value: &T) -> Items<'_, T> {
    Items::new(header_value)
}

/// Test whether any item of a comma separated header value satisfies a
/// predicate.
///
/// Items are tested from left to right and the scan stops at the first
/// match. The predicate is never handed an empty item.
///
/// ```
/// use header_algorithm::header_value_any_of;
///
/// assert!(header_value_any_of("no-cache, no-store", |item: &str| item == "no-store"));
/// assert!(!header_value_any_of(" , ,", |_: &str| true));
/// ```
pub fn any_of<'s, T, P>(header_value: &'s T, predicate: P) -> bool
where
    T: HeaderText + ?Sized,
    P: FnMut(&'s T) -> bool,
{
    items(header_value).any(predicate)
}

/// Test whether a header value lists a token, ignoring ASCII case.
///
/// ```
/// use header_algorithm::list;
///
/// assert!(list::contains_token("keep-alive, Upgrade", "upgrade"));
/// assert!(!list::contains_token("keep-alive", "close"));
/// ```
pub fn contains_token<T>(header_value: &T, token: &str) -> bool
where
    T: HeaderText + ?Sized,
{
    any_of(header_value, |item: &T| {
        item.as_bytes().eq_ignore_ascii_case(token.as_bytes())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    /// Run the matcher, recording every item the predicate is handed.
    fn seen<'s>(header_value: &'s str, wanted: &str) -> (bool, Vec<&'s str>) {
        let mut calls = Vec::new();
        let found = any_of(header_value, |item: &'s str| {
            calls.push(item);
            item == wanted
        });
        (found, calls)
    }

    #[test]
    fn skips_blank_items() {
        let (found, calls) = seen("a, b ,  , c", "b");
        assert!(found);
        assert_eq!(calls, vec!["a", "b"]);
    }

    #[test]
    fn visits_every_item_without_match() {
        let (found, calls) = seen("a, b ,  , c", "d");
        assert!(!found);
        assert_eq!(calls, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_value() {
        let (found, calls) = seen("", "");
        assert!(!found);
        assert!(calls.is_empty());
    }

    #[test]
    fn trailing_comma() {
        let (found, calls) = seen("x,", "y");
        assert!(!found);
        assert_eq!(calls, vec!["x"]);
    }

    #[test]
    fn leading_comma() {
        let (found, calls) = seen(",x", "x");
        assert!(found);
        assert_eq!(calls, vec!["x"]);
    }

    #[test]
    fn only_separators() {
        for value in &[",", ",,,", " ", " , ,\t", "\r\n,\x0B\x0C"] {
            let (found, calls) = seen(value, "");
            assert!(!found);
            assert!(calls.is_empty(), "{:?} gave {:?}", value, calls);
        }
    }

    #[test]
    fn inner_space_is_kept() {
        let (_, calls) = seen(" max-age = 5 ,\tprivate\t", "");
        assert_eq!(calls, vec!["max-age = 5", "private"]);
    }

    #[test]
    fn items_are_borrowed() {
        let value = "gzip, deflate";
        let item = items(value).nth(1).unwrap();
        assert_eq!(item, "deflate");
        assert_eq!(item.as_ptr(), value[6..].as_ptr());
    }

    #[test]
    fn byte_values() {
        let value: &[u8] = b"chunked, \xFFgzip\xFF , identity";
        let collected: Vec<&[u8]> = items(value).collect();
        assert_eq!(collected, vec![&b"chunked"[..], &b"\xFFgzip\xFF"[..], &b"identity"[..]]);
    }

    #[test]
    fn fused() {
        let mut iter = items("a,");
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn trim_ranges() {
        assert_eq!(trim(b"  ab  ", 0..6), 2..4);
        assert_eq!(trim(b"    ", 0..4), 4..4);
        assert_eq!(trim(b"a,b", 2..3), 2..3);
        assert_eq!(trim(b"", 0..0), 0..0);
    }

    #[test]
    fn tokens_ignore_case() {
        assert!(contains_token("Keep-Alive, Upgrade", "keep-alive"));
        assert!(contains_token(&b"close"[..], "CLOSE"));
        assert!(!contains_token("closed", "close"));
    }
}
