//! Parsing of the dates and timestamps accepted by the API.

use std::ops::RangeInclusive;

use time::{
    Date, OffsetDateTime, Time, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::Error;

/// The last representable millisecond of a day.
const END_OF_DAY: Time = time::macros::time!(23:59:59.999);

/// Parse either an RFC 3339 timestamp or a calendar date (YYYY-MM-DD).
///
/// Calendar dates are interpreted as midnight UTC.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is neither.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, Error> {
    let text = text.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(timestamp);
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Move `timestamp` to 23:59:59.999 on the same calendar day, keeping its offset.
pub fn end_of_day(timestamp: OffsetDateTime) -> OffsetDateTime {
    timestamp.replace_time(END_OF_DAY)
}

/// The range of years that can be written as an RFC 3339 timestamp.
const FORMATTABLE_YEARS: RangeInclusive<i32> = 0..=9999;

/// Convert `timestamp` to UTC.
///
/// Returns `None` if the UTC time falls outside the years 0 to 9999, which
/// cannot be formatted as RFC 3339.
pub fn to_utc(timestamp: OffsetDateTime) -> Option<OffsetDateTime> {
    timestamp
        .checked_to_offset(UtcOffset::UTC)
        .filter(|utc| FORMATTABLE_YEARS.contains(&utc.year()))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::Error;

    use super::{end_of_day, parse_timestamp, to_utc};

    #[test]
    fn parses_rfc3339_with_milliseconds() {
        let got = parse_timestamp("2024-07-15T10:00:00.000Z").unwrap();

        assert_eq!(got, datetime!(2024-07-15 10:00:00 UTC));
    }

    #[test]
    fn parses_calendar_date_as_midnight_utc() {
        let got = parse_timestamp("2024-07-15").unwrap();

        assert_eq!(got, datetime!(2024-07-15 00:00:00 UTC));
    }

    #[test]
    fn rejects_garbage() {
        let got = parse_timestamp("next tuesday");

        assert_eq!(got, Err(Error::InvalidDate("next tuesday".to_owned())));
    }

    #[test]
    fn end_of_day_keeps_offset() {
        let got = end_of_day(datetime!(2024-07-15 08:30:00 +12:00));

        assert_eq!(got, datetime!(2024-07-15 23:59:59.999 +12:00));
    }

    #[test]
    fn converts_to_utc() {
        let got = to_utc(datetime!(2024-07-16 08:00:00 +12:00)).unwrap();

        assert_eq!(got, datetime!(2024-07-15 20:00:00 UTC));
        assert!(got.offset().is_utc());
    }

    #[test]
    fn to_utc_rejects_year_after_9999() {
        let timestamp = parse_timestamp("9999-12-31T23:00:00-05:00").unwrap();

        assert_eq!(to_utc(timestamp), None);
    }

    #[test]
    fn to_utc_rejects_year_before_0() {
        let timestamp = parse_timestamp("0000-01-01T00:00:00+01:00").unwrap();

        assert_eq!(to_utc(timestamp), None);
    }

    #[test]
    fn to_utc_accepts_edges_of_range() {
        let first = parse_timestamp("0000-01-01T00:00:00Z").unwrap();
        let last = parse_timestamp("9999-12-31T23:59:59Z").unwrap();

        assert_eq!(to_utc(first), Some(first));
        assert_eq!(to_utc(last), Some(last));
    }
}
