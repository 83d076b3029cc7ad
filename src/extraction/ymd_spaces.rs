//! Space-separated numeric dates: "1980 2 21", "21 2 1980".
//!
//! A zero component means the component is absent: "0 2 1980" is February
//! 1980.

use crate::edtf::{DatePart, EdtfDate, Instant};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static YMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4}) (\d{1,2}) (\d{1,2})$").unwrap());
static DMY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}) (\d{1,2}) (\d{4})$").unwrap());

pub struct YmdSpacesExtractor;

impl DateExtractor for YmdSpacesExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let trimmed = input.trim();
        let (year, month, day) = if let Some(caps) = YMD.captures(trimmed) {
            (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
        } else if let Some(caps) = DMY.captures(trimmed) {
            (caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)
        } else {
            return None;
        };
        let date = DatePart::of_year(year).with_month(month).with_day(day);
        Some(ExtractedDate::new(
            MatchId::YyyyMmDdSpaces,
            EdtfDate::Instant(Instant::from_date(date)),
        ))
    }
}
