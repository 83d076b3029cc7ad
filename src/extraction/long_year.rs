//! Years before -9999, serialized with the EDTF "Y" prefix: "-500000"
//! becomes "Y-500000".

use crate::edtf::{DatePart, EdtfDate, Instant, Interval};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(-\d{5,9})\s*$").unwrap());
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-\d{5,9})/(-\d{5,9})\s*$").unwrap());

fn long_year(value: &str) -> Option<Instant> {
    Some(Instant::from_date(DatePart::of_year(value.parse().ok()?)))
}

pub struct LongYearExtractor;

impl DateExtractor for LongYearExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        if let Some(caps) = RANGE.captures(input) {
            return Some(ExtractedDate::new(
                MatchId::LongYear,
                EdtfDate::Interval(Interval::new(long_year(&caps[1])?, long_year(&caps[2])?)),
            ));
        }
        let caps = SINGLE.captures(input)?;
        Some(ExtractedDate::new(
            MatchId::LongYear,
            EdtfDate::Instant(long_year(&caps[1])?),
        ))
    }
}
