//! Already well-formed EDTF level 0/1 literals.
//!
//! Recognizes "[-]YYYY[-MM[-DD]]" dates with an optional "T" time part, the
//! "?", "~" and "%" qualifier suffixes, bare "hh:mm[:ss]" time-only values,
//! and intervals "A/B" where an empty side or ".." is the unspecified
//! sentinel and "unknown" the unknown sentinel. Years must have exactly four
//! digits here; shorter and longer years belong to the numeric and long-year
//! conventions.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval, TimePart};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d{4})(?:-(\d{2})(?:-(\d{2}))?)?$").unwrap());
static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2})(?::(\d{2}))?(?:Z|[+-]\d{2}(?::\d{2})?)?$").unwrap()
});

pub struct EdtfLiteralExtractor;

impl DateExtractor for EdtfLiteralExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let value = input.trim();
        let date = match value.split_once('/') {
            Some((start, end)) => EdtfDate::Interval(Interval::new(
                parse_endpoint(start)?,
                parse_endpoint(end)?,
            )),
            None => EdtfDate::Instant(parse_instant(value)?),
        };
        Some(ExtractedDate::new(MatchId::Edtf, date))
    }
}

fn parse_endpoint(value: &str) -> Option<Instant> {
    let value = value.trim();
    if value.is_empty() || value == ".." {
        return Some(Instant::Unspecified);
    }
    if value.eq_ignore_ascii_case("unknown") {
        return Some(Instant::Unknown);
    }
    parse_instant(value)
}

fn parse_instant(value: &str) -> Option<Instant> {
    if let Some(time) = parse_time(value) {
        return Some(Instant::Time(time));
    }
    let (body, approximate, uncertain) = match value.as_bytes().last() {
        Some(b'%') => (&value[..value.len() - 1], true, true),
        Some(b'~') => (&value[..value.len() - 1], true, false),
        Some(b'?') => (&value[..value.len() - 1], false, true),
        _ => (value, false, false),
    };
    if body.is_empty() {
        return None;
    }
    let (date_str, time) = match body.split_once('T') {
        Some((date_str, time_str)) => (date_str, Some(parse_time(time_str)?)),
        None => (body, None),
    };
    let caps = DATE.captures(date_str)?;
    let year: i32 = caps[1].parse().ok()?;
    let mut date = DatePart::of_year(year)
        .with_approximate(approximate)
        .with_uncertain(uncertain);
    if let Some(month) = caps.get(2) {
        date = date.with_month(month.as_str().parse().ok()?);
        if let Some(day) = caps.get(3) {
            date = date.with_day(day.as_str().parse().ok()?);
        }
    }
    Some(match time {
        Some(time) => Instant::from_date_and_time(date, time),
        None => Instant::from_date(date),
    })
}

fn parse_time(value: &str) -> Option<TimePart> {
    let caps = TIME.captures(value)?;
    Some(TimePart::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps.get(3).map_or(Some(0), |s| s.as_str().parse().ok())?,
    ))
}
