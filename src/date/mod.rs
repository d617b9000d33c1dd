//! Dates in HTTP headers come in three historical formats.
//!
//! ```text
//! HTTP-date    = rfc1123-date | rfc850-date | asctime-date
//!
//! rfc1123-date = Sun, 06 Nov 1994 08:49:37 GMT
//! rfc850-date  = Sunday, 06-Nov-94 08:49:37 GMT
//! asctime-date = Sun Nov  6 08:49:37 1994
//! ```
//!
//! The formats are tried in that order. A format whose shape does not fit
//! the text hands over to the next one, but once a shape fits, any problem
//! with the values inside it fails the whole parse.
//!
//! Weekday names are required by the grammars but never checked against the
//! date they accompany. Two digit years are always read as `1900 + YY`.

mod decimal;
mod month;
mod pattern;

use std::str::FromStr;

use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time};

use self::decimal::from_decimal;
use self::pattern::{match_pattern, Field, Token};
use crate::error::*;

/// A calendar timestamp read from a header.
///
/// GMT is implied and never stored. A timestamp that failed to parse is
/// *not-a-date-time*, which is checked with [`Timestamp::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(Option<PrimitiveDateTime>);

impl Timestamp {
    /// The value produced for text that is not an HTTP-date.
    pub const NOT_A_DATE_TIME: Timestamp = Timestamp(None);

    /// The timestamp holds a date and time.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The timestamp is the failure sentinel.
    pub fn is_not_a_date_time(&self) -> bool {
        self.0.is_none()
    }

    /// The date and time, if there is one.
    pub fn datetime(&self) -> Option<PrimitiveDateTime> {
        self.0
    }

    /// Attach the implied GMT offset.
    pub fn assume_gmt(&self) -> Option<OffsetDateTime> {
        self.0.map(PrimitiveDateTime::assume_utc)
    }

    /// The calendar year.
    pub fn year(&self) -> Option<i32> {
        self.0.map(|datetime| datetime.year())
    }

    /// The month of the year.
    pub fn month(&self) -> Option<Month> {
        self.0.map(|datetime| datetime.month())
    }

    /// The day of the month, starting at 1.
    pub fn day(&self) -> Option<u8> {
        self.0.map(|datetime| datetime.day())
    }

    /// The hour of the day.
    pub fn hour(&self) -> Option<u8> {
        self.0.map(|datetime| datetime.hour())
    }

    /// The minute of the hour.
    pub fn minute(&self) -> Option<u8> {
        self.0.map(|datetime| datetime.minute())
    }

    /// The second of the minute.
    pub fn second(&self) -> Option<u8> {
        self.0.map(|datetime| datetime.second())
    }
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(datetime: PrimitiveDateTime) -> Timestamp {
        Timestamp(Some(datetime))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(source: &str) -> Result<Timestamp> {
        try_parse(source)
    }
}

/// One of the three HTTP-date formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `Sun, 06 Nov 1994 08:49:37 GMT`
    Rfc1123,
    /// `Sunday, 06-Nov-94 08:49:37 GMT`
    Rfc1036,
    /// `Sun Nov  6 08:49:37 1994`
    Asctime,
}

impl Format {
    /// Every format, in the order they are tried.
    pub const ALL: [Format; 3] = [Format::Rfc1123, Format::Rfc1036, Format::Asctime];

    fn pattern(self) -> &'static [Token] {
        match self {
            Format::Rfc1123 => pattern::RFC1123,
            Format::Rfc1036 => pattern::RFC1036,
            Format::Asctime => pattern::ASCTIME,
        }
    }

    /// Added to the captured year.
    fn century(self) -> i32 {
        match self {
            Format::Rfc1036 => 1900,
            Format::Rfc1123 | Format::Asctime => 0,
        }
    }
}

/// Parse an HTTP-date.
///
/// Text that is not a date, or names a time or day that cannot exist,
/// produces [`Timestamp::NOT_A_DATE_TIME`].
///
/// ```
/// use header_algorithm::date;
///
/// let date = date::parse("Sun, 06 Nov 1994 08:49:37 GMT");
/// assert!(date.is_valid());
/// assert_eq!(date.year(), Some(1994));
///
/// assert!(!date::parse("not a date").is_valid());
/// ```
pub fn parse<T>(text: T) -> Timestamp
where
    T: AsRef<[u8]>,
{
    try_parse(text).unwrap_or_default()
}

/// Parse an HTTP-date, keeping the reason it failed.
pub fn try_parse<T>(text: T) -> Result<Timestamp>
where
    T: AsRef<[u8]>,
{
    let text = text.as_ref();
    for &format in Format::ALL.iter() {
        match recognize(text, format) {
            Ok(datetime) => {
                trace!("read {:?} date {}", format, datetime);
                return Ok(datetime.into());
            }
            Err(ref err) if err.is_mismatch() => continue,
            Err(err) => {
                debug!(
                    "rejecting {:?} date {:?}: {}",
                    format,
                    String::from_utf8_lossy(text),
                    err
                );
                return Err(err);
            }
        }
    }
    Err(ErrorKind::FormatMismatch.into())
}

/// Parse text in one specific HTTP-date format.
pub fn parse_format<T>(text: T, format: Format) -> Timestamp
where
    T: AsRef<[u8]>,
{
    recognize(text.as_ref(), format)
        .map(Timestamp::from)
        .unwrap_or_default()
}

/// Earliest year on the Gregorian calendar a header date may name.
const MIN_YEAR: i32 = 1400;

/// Check the shape of the text, then its time of day, then its date.
fn recognize(text: &[u8], format: Format) -> Result<PrimitiveDateTime> {
    let captures = match_pattern(format.pattern(), text).ok_or(ErrorKind::FormatMismatch)?;

    let hour: u8 = from_decimal(captures.get(Field::Hour));
    let minute: u8 = from_decimal(captures.get(Field::Minute));
    let second: u8 = from_decimal(captures.get(Field::Second));
    ensure!(hour <= 23, ErrorKind::FieldOutOfRange("hour", hour));
    ensure!(minute <= 59, ErrorKind::FieldOutOfRange("minute", minute));
    ensure!(second <= 60, ErrorKind::FieldOutOfRange("second", second));

    let year = format.century() + from_decimal::<i32>(captures.get(Field::Year));
    let month = month::from_abbreviation(captures.get(Field::Month));
    let day: u8 = from_decimal(captures.get(Field::Day));
    ensure!(year >= MIN_YEAR, ErrorKind::ImpossibleDate);
    let date =
        Date::from_calendar_date(year, month, day).map_err(|_| ErrorKind::ImpossibleDate)?;

    // A leap second is counted into the following minute.
    if second == 60 {
        let datetime = PrimitiveDateTime::new(date, Time::from_hms(hour, minute, 59)?);
        datetime
            .checked_add(Duration::SECOND)
            .ok_or_else(|| ErrorKind::ImpossibleDate.into())
    } else {
        Ok(PrimitiveDateTime::new(date, Time::from_hms(hour, minute, second)?))
    }
}
