//! Century conventions: "18..", "19th century", "S. XVI", "S. XVI-XVIII".
//!
//! All variants produce century-precision years: the stored year is the
//! century's lower boundary ((century - 1) * 100), serialized as "18XX".
//! A leading or trailing "?" marks the value uncertain.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval, YearPrecision};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use crate::extraction::roman::parse_roman;
use once_cell::sync::Lazy;
use regex::Regex;

// Roman numerals I through XXI.
const ROMAN: &str = r"(?:X?(?:IX|IV|VI{0,3}|I{1,3})|XXI?|X)";
// Optional "century of the era" marker: "s", "sec" or "saec", dotted or spaced.
const ROMAN_PREFIX: &str = r"(?:(?:s|sec|saec)(?:\.\s*|\s+))?";

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\?)?(1\d|2[0-1])\.{2}(\?)?\s*$").unwrap());
static ENGLISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\?)?(2?1st|2nd|3rd|(?:1\d|[4-9]|20)th)\s+century(\?)?\s*$").unwrap()
});
static ROMAN_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^\s*(\?)?{ROMAN_PREFIX}({ROMAN})(\?)?\s*$")).unwrap()
});
static ROMAN_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(\?)?{ROMAN_PREFIX}({ROMAN})\s*-\s*({ROMAN})(\?)?\s*$"
    ))
    .unwrap()
});

pub struct CenturyExtractor;

impl DateExtractor for CenturyExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        extract_numeric(input)
            .or_else(|| extract_english(input))
            .or_else(|| extract_roman_range(input))
            .or_else(|| extract_roman(input))
    }
}

fn century_date(century: u32, uncertain: bool) -> DatePart {
    DatePart::of_year((century as i32 - 1) * 100)
        .with_year_precision(Some(YearPrecision::Century))
        .with_uncertain(uncertain)
}

fn extract_numeric(input: &str) -> Option<ExtractedDate> {
    let caps = NUMERIC.captures(input)?;
    let uncertain = caps.get(1).is_some() || caps.get(3).is_some();
    // "18.." names the years 1800-1899, i.e. the boundary itself.
    let year: i32 = caps[2].parse().ok()?;
    let date = DatePart::of_year(year * 100)
        .with_year_precision(Some(YearPrecision::Century))
        .with_uncertain(uncertain);
    Some(ExtractedDate::new(
        MatchId::CenturyNumeric,
        EdtfDate::Instant(Instant::from_date(date)),
    ))
}

fn extract_english(input: &str) -> Option<ExtractedDate> {
    let caps = ENGLISH.captures(input)?;
    let uncertain = caps.get(1).is_some() || caps.get(3).is_some();
    let ordinal: u32 = caps[2]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()?;
    Some(ExtractedDate::new(
        MatchId::CenturyNumeric,
        EdtfDate::Instant(Instant::from_date(century_date(ordinal, uncertain))),
    ))
}

fn extract_roman(input: &str) -> Option<ExtractedDate> {
    let caps = ROMAN_SINGLE.captures(input)?;
    let uncertain = caps.get(1).is_some() || caps.get(3).is_some();
    let century = parse_roman(&caps[2])?;
    Some(ExtractedDate::new(
        MatchId::CenturyRoman,
        EdtfDate::Instant(Instant::from_date(century_date(century, uncertain))),
    ))
}

fn extract_roman_range(input: &str) -> Option<ExtractedDate> {
    let caps = ROMAN_RANGE.captures(input)?;
    let uncertain = caps.get(1).is_some() || caps.get(4).is_some();
    let start = parse_roman(&caps[2])?;
    let end = parse_roman(&caps[3])?;
    Some(ExtractedDate::new(
        MatchId::CenturyRangeRoman,
        EdtfDate::Interval(Interval::new(
            Instant::from_date(century_date(start, uncertain)),
            Instant::from_date(century_date(end, uncertain)),
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extract(input: &str) -> Option<(MatchId, String)> {
        CenturyExtractor
            .extract(input)
            .map(|extracted| (extracted.match_id, extracted.date.to_string()))
    }

    #[rstest]
    #[case("18..", MatchId::CenturyNumeric, "18XX")]
    #[case("  16..", MatchId::CenturyNumeric, "16XX")]
    #[case("?18..", MatchId::CenturyNumeric, "18XX?")]
    #[case("18th century", MatchId::CenturyNumeric, "17XX")]
    #[case("2nd century", MatchId::CenturyNumeric, "01XX")]
    #[case("21st century", MatchId::CenturyNumeric, "20XX")]
    #[case("XIV", MatchId::CenturyRoman, "13XX")]
    #[case("S. XVI", MatchId::CenturyRoman, "15XX")]
    #[case("s. XXI", MatchId::CenturyRoman, "20XX")]
    #[case("sec. XV", MatchId::CenturyRoman, "14XX")]
    #[case("saec. XV", MatchId::CenturyRoman, "14XX")]
    #[case("XIV?", MatchId::CenturyRoman, "13XX?")]
    #[case("?XIV", MatchId::CenturyRoman, "13XX?")]
    #[case("S. XVI-XVIII", MatchId::CenturyRangeRoman, "15XX/17XX")]
    #[case("S. XVI - XVIII", MatchId::CenturyRangeRoman, "15XX/17XX")]
    fn test_centuries(
        #[case] input: &str,
        #[case] expected_id: MatchId,
        #[case] expected: &str,
    ) {
        assert_eq!(extract(input), Some((expected_id, expected.to_string())));
    }

    #[rstest]
    #[case("22..")]
    #[case("9..")]
    #[case("3rd quarter")]
    #[case("22nd century")]
    #[case("XXII")]
    #[case("12th century BC")]
    fn test_unsupported_centuries(#[case] input: &str) {
        assert_eq!(extract(input), None);
    }
}
