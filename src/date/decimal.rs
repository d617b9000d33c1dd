//! Decimal fields.

use std::ops::{Add, Mul};

use crate::text::is_digit;

/// Decode a run of ASCII digits into an unsigned integer.
///
/// The run is walked from its least significant digit upwards. It must be
/// non-empty, hold only `0`-`9` and be short enough to fit in `T`; the
/// pattern that captured it has already made sure of all three.
pub fn from_decimal<T>(digits: &[u8]) -> T
where
    T: From<u8> + Add<Output = T> + Mul<Output = T> + Copy,
{
    let ten = T::from(10);
    let mut value = T::from(0);
    let mut weight = T::from(1);
    for (place, &digit) in digits.iter().rev().enumerate() {
        debug_assert!(is_digit(digit));
        if place > 0 {
            weight = weight * ten;
        }
        value = value + T::from(digit - b'0') * weight;
    }
    value
}
