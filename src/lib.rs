//! Algorithms over HTTP header values.
//!
//! Two independent pieces live here:
//!
//! - [`date`] reads the three date formats that may appear in headers such as
//!   `Date`, `Expires` and `Last-Modified`
//!   ([RFC7231 §7.1.1.1][rfc7231]).
//! - [`list`] walks comma separated header values like `Cache-Control` or
//!   `Connection` without copying them.
//!
//! Neither one allocates or keeps hold of the text it is given.
//!
//! [rfc7231]: https://tools.ietf.org/html/rfc7231#section-7.1.1.1

#![deny(missing_docs)]

#[macro_use]
extern crate error_chain;
#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
mod logging;

pub mod date;
pub mod error;
pub mod list;
pub mod text;

pub use date::{parse as header_to_timestamp, Timestamp};
pub use list::any_of as header_value_any_of;
