//! Decades: "197x", "197u", "1970s".
//!
//! A trailing hyphen ("[171-]") is deliberately not accepted: it cannot be
//! told apart from a truncated range.

use crate::edtf::{DatePart, EdtfDate, Instant, YearPrecision};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static DECADE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\?)?(\d{3})(?:[xu]s?|0s)(\?)?\s*$").unwrap());

pub struct DecadeExtractor;

impl DateExtractor for DecadeExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let caps = DECADE.captures(input)?;
        let uncertain = caps.get(1).is_some() || caps.get(3).is_some();
        let year: i32 = caps[2].parse().ok()?;
        let date = DatePart::of_year(year * 10)
            .with_year_precision(Some(YearPrecision::Decade))
            .with_uncertain(uncertain);
        Some(ExtractedDate::new(
            MatchId::Decade,
            EdtfDate::Instant(Instant::from_date(date)),
        ))
    }
}
