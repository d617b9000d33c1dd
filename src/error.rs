//! Errors produced while reading header values.
//!
//! The public date parser folds all of these into the not-a-date-time
//! sentinel. They are only visible through [`try_parse`](crate::date::try_parse)
//! and `Timestamp::from_str`, and internally they decide whether the next
//! date format is still worth trying.

#![allow(missing_docs)]

error_chain! {
    foreign_links {
        Time(::time::error::ComponentRange);
    }

    errors {
        FormatMismatch {
            description("The text does not have the shape of any HTTP-date format"),
        }
        FieldOutOfRange(field: &'static str, value: u8) {
            description("A time of day field was out of range"),
            display("The {} field is out of range: {}", field, value),
        }
        ImpossibleDate {
            description("The date fields do not name a day on the calendar"),
        }
    }
}

impl Error {
    /// Whether the failure only means the text had another format's shape.
    ///
    /// Every other failure happened after a format matched and ends the parse.
    pub fn is_mismatch(&self) -> bool {
        match *self.kind() {
            ErrorKind::FormatMismatch => true,
            _ => false,
        }
    }
}
