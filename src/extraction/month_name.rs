//! Dates spelled with an English month name: "18. September 1914",
//! "July 22, 1941", "January 1945", "6 Nov 1902".

use crate::edtf::{DatePart, EdtfDate, Instant};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static DMY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?:st|nd|rd|th)?\.?\s+([A-Za-z]{3,9})\.?,?\s+(\d{3,4})\s*$")
        .unwrap()
});
static MDY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([A-Za-z]{3,9})\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{3,4})\s*$")
        .unwrap()
});
static MY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([A-Za-z]{3,9})\.?,?\s+(\d{3,4})\s*$").unwrap());

/// Maps an English month name or abbreviation ("Sep", "Sept.", "september")
/// to its number.
pub(crate) fn month_number(name: &str) -> Option<u32> {
    let name = name.trim_end_matches('.').to_ascii_lowercase();
    let number = match name.as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(number)
}

pub struct MonthNameExtractor;

impl DateExtractor for MonthNameExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let date = if let Some(caps) = DMY.captures(input) {
            DatePart::of_year(caps[3].parse().ok()?)
                .with_month(month_number(&caps[2])?)
                .with_day(caps[1].parse().ok()?)
        } else if let Some(caps) = MDY.captures(input) {
            DatePart::of_year(caps[3].parse().ok()?)
                .with_month(month_number(&caps[1])?)
                .with_day(caps[2].parse().ok()?)
        } else if let Some(caps) = MY.captures(input) {
            DatePart::of_year(caps[2].parse().ok()?).with_month(month_number(&caps[1])?)
        } else {
            return None;
        };
        Some(ExtractedDate::new(
            MatchId::MonthName,
            EdtfDate::Instant(Instant::from_date(date)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extract(input: &str) -> Option<String> {
        MonthNameExtractor
            .extract(input)
            .map(|extracted| extracted.date.to_string())
    }

    #[rstest]
    #[case("18. September 1914", Some("1914-09-18"))]
    #[case("18 September 1914", Some("1914-09-18"))]
    #[case("18th September 1914", Some("1914-09-18"))]
    #[case("6 Nov 1902", Some("1902-11-06"))]
    #[case("6 Nov. 1902", Some("1902-11-06"))]
    #[case("July 22, 1941", Some("1941-07-22"))]
    #[case("July 22 1941", Some("1941-07-22"))]
    #[case("January 1945", Some("1945-01"))]
    #[case("Sept. 1939", Some("1939-09"))]
    #[case("Thermidor 1794", None)]
    #[case("18 September", None)]
    #[case("1914 September 18", None)]
    fn test_month_names(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract(input).as_deref(), expected);
    }
}
