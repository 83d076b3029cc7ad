//! Timestamps produced by common programming-language formatters:
//! "Sat Jan 01 01:00:00 CET 1701" and "2013-09-07 09:31:51 UTC".
//!
//! The time of day is kept on the parsed value but never serialized; it only
//! participates in validation.

use crate::edtf::{DatePart, EdtfDate, Instant, TimePart};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use crate::extraction::month_name::month_number;
use once_cell::sync::Lazy;
use regex::Regex;

static WEEKDAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\w{3} (\w{3}) (\d{2}) (\d{2}):(\d{2}):(\d{2})(?: \w{3,5})? (\d{4})\s*$")
        .unwrap()
});
static ISO_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})(?:\.\d{1,3})?(?: \w{1,5})?\s*$")
        .unwrap()
});

pub struct FormattedFullDateExtractor;

impl DateExtractor for FormattedFullDateExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let (date, time) = if let Some(caps) = WEEKDAY_FIRST.captures(input) {
            let date = DatePart::of_year(caps[6].parse().ok()?)
                .with_month(month_number(&caps[1])?)
                .with_day(caps[2].parse().ok()?);
            let time = TimePart::new(
                caps[3].parse().ok()?,
                caps[4].parse().ok()?,
                caps[5].parse().ok()?,
            );
            (date, time)
        } else if let Some(caps) = ISO_LIKE.captures(input) {
            let date = DatePart::of_year(caps[1].parse().ok()?)
                .with_month(caps[2].parse().ok()?)
                .with_day(caps[3].parse().ok()?);
            let time = TimePart::new(
                caps[4].parse().ok()?,
                caps[5].parse().ok()?,
                caps[6].parse().ok()?,
            );
            (date, time)
        } else {
            return None;
        };
        Some(ExtractedDate::new(
            MatchId::FormattedFullDate,
            EdtfDate::Instant(Instant::from_date_and_time(date, time)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extract(input: &str) -> Option<String> {
        FormattedFullDateExtractor
            .extract(input)
            .map(|extracted| extracted.date.to_string())
    }

    #[rstest]
    #[case("Sat Jan 01 01:00:00 CET 1701", Some("1701-01-01"))]
    #[case("Fri Dec 31 23:59:59 1999", Some("1999-12-31"))]
    #[case("2013-09-07 09:31:51 UTC", Some("2013-09-07"))]
    #[case("2013-09-07 09:31:51.123", Some("2013-09-07"))]
    #[case("2013-09-07 09:31:51", Some("2013-09-07"))]
    #[case("2013-09-07", None)]
    #[case("Sat Foo 01 01:00:00 CET 1701", None)]
    fn test_formatted_full_dates(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract(input).as_deref(), expected);
    }
}
