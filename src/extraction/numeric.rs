//! Numeric dates with varying component separators, in year-month-day and
//! day-month-year arrangements, including unknown-component placeholders
//! ("19XX", "19--", "19??", "23.02.18--").
//!
//! A value with exactly one leading or trailing question mark (or three;
//! two belong to the "??" unknown-component token) is uncertain. A
//! three-digit year directly followed by "?" is declined as ambiguous: it
//! could equally be a decade ("192?").

use crate::edtf::{DatePart, EdtfDate, Instant, YearPrecision};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static YMD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\??(\d{3,4})(?:[-./](\d{1,2}))?(?:[-./](\d{1,2}))?\??$").unwrap()
});
static DMY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\??(?:(\d{1,2})[-./])?(?:(\d{1,2})[-./])?(\d{3,4})\??$").unwrap()
});

const YEAR_XX: &str = r"\d{2}(?:XX|UU|--|\?\?)|\d{3}[XU]|\d{4}";
const COMPONENT_XX: &str = r"\d{2}|XX|UU|--|\?\?";

static YMD_XX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\??({YEAR_XX})(?:[-./]({COMPONENT_XX}))?(?:[-./]({COMPONENT_XX}))?\??$"
    ))
    .unwrap()
});
static DMY_XX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\??(?:({COMPONENT_XX})[-./])?(?:({COMPONENT_XX})[-./])?({YEAR_XX})\??$"
    ))
    .unwrap()
});

pub(crate) fn has_uncertainty_marker(value: &str) -> bool {
    let starting = (value.starts_with('?') && !value.starts_with("??")) || value.starts_with("???");
    let ending = (value.ends_with('?') && !value.ends_with("??")) || value.ends_with("???");
    starting || ending
}

/// Month/day group juggling shared by the single-date and range extractors:
/// the day-month-year arrangement with a single component ("11-1989") binds
/// the component to the day group, but it means the month.
pub(crate) fn resolve_month_and_day<'a>(
    month: Option<&'a str>,
    day: Option<&'a str>,
) -> (Option<&'a str>, Option<&'a str>) {
    match (month, day) {
        (Some(month), day) => (Some(month), day),
        (None, Some(day)) => (Some(day), None),
        (None, None) => (None, None),
    }
}

/// Plain numeric dates: "1941-22-06", "11-1989", "?1943", "1923?".
pub struct NumericExtractor;

impl DateExtractor for NumericExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let sanitized = WHITESPACE.replace_all(input, " ").trim().to_string();
        let uncertain = has_uncertainty_marker(&sanitized);
        YMD.captures(&sanitized)
            .and_then(|caps| build_plain(&sanitized, &caps, 1, 2, 3, uncertain))
            .or_else(|| {
                DMY.captures(&sanitized)
                    .and_then(|caps| build_plain(&sanitized, &caps, 3, 2, 1, uncertain))
            })
    }
}

fn build_plain(
    sanitized: &str,
    caps: &Captures<'_>,
    year_index: usize,
    month_index: usize,
    day_index: usize,
    uncertain: bool,
) -> Option<ExtractedDate> {
    let year_match = caps.get(year_index)?;
    if year_match.as_str().len() == 3
        && sanitized.as_bytes().get(year_match.end()) == Some(&b'?')
    {
        return None;
    }
    let year: i32 = year_match.as_str().parse().ok()?;
    let (month, day) = resolve_month_and_day(
        caps.get(month_index).map(|m| m.as_str()),
        caps.get(day_index).map(|m| m.as_str()),
    );
    let mut date = DatePart::of_year(year).with_uncertain(uncertain);
    if let Some(month) = month {
        date = date.with_month(month.parse().ok()?);
    }
    if let Some(day) = day {
        date = date.with_day(day.parse().ok()?);
    }
    Some(ExtractedDate::new(
        MatchId::NumericAllVariants,
        EdtfDate::Instant(Instant::from_date(date)),
    ))
}

/// Numeric dates with unknown-component placeholders: "19XX", "19--",
/// "23.02.18--", "193u".
pub struct NumericXxExtractor;

impl DateExtractor for NumericXxExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let sanitized = WHITESPACE.replace_all(input, " ").trim().to_string();
        // Three dashes in a row cannot be split between a separator and an
        // unknown-component token unambiguously.
        if sanitized.contains("---") {
            return None;
        }
        let uncertain = has_uncertainty_marker(&sanitized);
        YMD_XX
            .captures(&sanitized)
            .and_then(|caps| build_xx(&caps, 1, 2, 3, uncertain))
            .or_else(|| {
                DMY_XX
                    .captures(&sanitized)
                    .and_then(|caps| build_xx(&caps, 3, 2, 1, uncertain))
            })
    }
}

fn strip_unknown_characters(component: &str) -> String {
    component
        .chars()
        .filter(|c| !matches!(c.to_ascii_uppercase(), 'X' | 'U' | '?' | '-'))
        .collect()
}

fn build_xx(
    caps: &Captures<'_>,
    year_index: usize,
    month_index: usize,
    day_index: usize,
    uncertain: bool,
) -> Option<ExtractedDate> {
    let year_raw = caps.get(year_index)?.as_str();
    let year_digits = strip_unknown_characters(year_raw);
    let unknown_count = year_raw.len() - year_digits.len();
    let precision = YearPrecision::from_unknown_digits(unknown_count);
    let multiplier = precision.map_or(1, YearPrecision::duration);
    let year: i32 = year_digits.parse::<i32>().ok()? * multiplier;

    let month = caps.get(month_index).map(|m| strip_unknown_characters(m.as_str()));
    let day = caps.get(day_index).map(|m| strip_unknown_characters(m.as_str()));
    let (month, day) = resolve_month_and_day(
        month.as_deref().filter(|m| !m.is_empty()),
        day.as_deref().filter(|d| !d.is_empty()),
    );

    let mut date = DatePart::of_year(year)
        .with_year_precision(precision)
        .with_uncertain(uncertain);
    if let Some(month) = month {
        date = date.with_month(month.parse().ok()?);
    }
    if let Some(day) = day {
        date = date.with_day(day.parse().ok()?);
    }
    Some(ExtractedDate::new(
        MatchId::NumericAllVariantsXx,
        EdtfDate::Instant(Instant::from_date(date)),
    ))
}
