//! Reservation start time: parsing user input and display formatting

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::ValidationError;

const FIELD: &str = "start time";

/// Date-time layouts accepted from forms, tried in order.
///
/// `datetime-local` inputs submit `YYYY-MM-DDTHH:MM`.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Layout for pre-filling a `datetime-local` input.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a start time.
///
/// Offset-carrying RFC 3339 values are stored as their UTC wall time.
pub fn parse(input: &str) -> Result<NaiveDateTime, ValidationError> {
    let s = input.trim();
    let invalid = || ValidationError::InvalidDate {
        field: FIELD,
        value: input.to_owned(),
    };

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(invalid)
}

/// Long human-readable form, e.g. `March 1st 2024, 7:05 pm`.
pub fn format(at: &NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{} {}{} {}, {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.year(),
        at.format("%-I:%M %P")
    )
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_datetime_local_input() {
        assert_eq!(parse("2024-03-01T19:05").unwrap(), at(2024, 3, 1, 19, 5));
        assert_eq!(parse("2024-03-01T19:05:00").unwrap(), at(2024, 3, 1, 19, 5));
    }

    #[test]
    fn parses_space_separated_and_date_only() {
        assert_eq!(parse("2024-03-01 19:05").unwrap(), at(2024, 3, 1, 19, 5));
        assert_eq!(parse("2024-03-01").unwrap(), at(2024, 3, 1, 0, 0));
        assert_eq!(parse("03/01/2024").unwrap(), at(2024, 3, 1, 0, 0));
        assert_eq!(parse("  2024-03-01  ").unwrap(), at(2024, 3, 1, 0, 0));
    }

    #[test]
    fn parses_rfc3339_as_utc() {
        assert_eq!(
            parse("2024-03-01T19:05:00-02:00").unwrap(),
            at(2024, 3, 1, 21, 5)
        );
        assert_eq!(parse("2024-03-01T19:05:00Z").unwrap(), at(2024, 3, 1, 19, 5));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "   ", "tomorrow", "2024-13-01", "2024-02-30T10:00", "19:05"] {
            let err = parse(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidDate { .. }),
                "expected InvalidDate for {bad:?}"
            );
        }
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn formats_long_form() {
        assert_eq!(format(&at(2024, 3, 1, 19, 5)), "March 1st 2024, 7:05 pm");
        assert_eq!(format(&at(2024, 7, 12, 0, 0)), "July 12th 2024, 12:00 am");
        assert_eq!(format(&at(2023, 11, 22, 12, 30)), "November 22nd 2023, 12:30 pm");
        assert_eq!(format(&at(2025, 1, 3, 9, 0)), "January 3rd 2025, 9:00 am");
    }
}
