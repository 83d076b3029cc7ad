//! Numeric date ranges with varying date and component separators.
//!
//! Each separator family pairs a range separator with the component
//! separators that cannot be confused with it ("1941-22.6/1942" style), in a
//! year-month-day and a day-month-year arrangement. The plain extractor also
//! accepts an open end ("1907/?", "1941-.."); the placeholder extractor
//! additionally accepts unknown-component tokens ("19XX", "191-").
//!
//! A range whose end is open and whose start year has fewer than four digits
//! is declined as ambiguous: "187-?" could be an open range or an uncertain
//! decade.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval, YearPrecision};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use crate::extraction::numeric::resolve_month_and_day;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

fn plain_side_ymd(component_sep: &str, unspecified: Option<&str>, s: &str) -> String {
    let date = format!(
        r"(?P<year{s}>\d{{3,4}})(?P<month{s}>{component_sep}\d{{1,2}})?(?P<day{s}>{component_sep}\d{{1,2}})?(?P<uncertain{s}>\?)?"
    );
    match unspecified {
        Some(unspecified) => format!(r"\s*(?:{date}|(?P<unspecified{s}>{unspecified}))\s*"),
        None => format!(r"\s*{date}\s*"),
    }
}

fn plain_side_dmy(component_sep: &str, unspecified: Option<&str>, s: &str) -> String {
    let date = format!(
        r"(?P<day{s}>\d{{1,2}}{component_sep})?(?P<month{s}>\d{{1,2}}{component_sep})?(?P<year{s}>\d{{3,4}})(?P<uncertain{s}>\?)?"
    );
    match unspecified {
        Some(unspecified) => format!(r"\s*(?:{date}|(?P<unspecified{s}>{unspecified}))\s*"),
        None => format!(r"\s*{date}\s*"),
    }
}

static PLAIN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let families: [(&str, &str, Option<&str>); 4] = [
        ("/", r"[-.]", Some(r"\?|-|\.\.")),
        (" - ", r"[-./]", Some(r"\?|-|\.\.")),
        ("-", r"[./]", Some(r"\?|\.\.")),
        (" ", r"[-./]", None),
    ];
    let mut patterns = Vec::new();
    for (date_sep, component_sep, unspecified) in families {
        patterns.push(format!(
            "^{}{date_sep}{}$",
            plain_side_ymd(component_sep, unspecified, ""),
            plain_side_ymd(component_sep, unspecified, "2")
        ));
        patterns.push(format!(
            "^{}{date_sep}{}$",
            plain_side_dmy(component_sep, unspecified, ""),
            plain_side_dmy(component_sep, unspecified, "2")
        ));
    }
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

fn xx_side_ymd(component_sep: &str, missing: &str, s: &str) -> String {
    format!(
        r"\s*(?:(?P<year{s}>\d{{3,4}}|\d{{3}}{missing}?|\d\d+{missing}{missing}?)(?:{component_sep}(?P<month{s}>\d{{1,2}}|\d{missing}?))?(?:{component_sep}(?P<day{s}>\d{{1,2}}|\d{missing}?))?|(?P<unspecified{s}>\?))\s*"
    )
}

fn xx_side_dmy(component_sep: &str, missing: &str, s: &str) -> String {
    format!(
        r"\s*(?:(?:(?P<day{s}>\d{{1,2}}|\d{missing}?){component_sep})?(?:(?P<month{s}>\d{{1,2}}|\d{missing}?){component_sep})?(?P<year{s}>\d{{3,4}}|\d\d{missing}{missing}?)|(?P<unspecified{s}>\?))\s*"
    )
}

static XX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let families: [(&str, &str, &str); 5] = [
        (r"\s*[/|]\s*", r"[-]", r"[Xu]"),
        (r"\s*[/|]\s*", r"[.]", r"[-Xu]"),
        (r"\s+[-|]\s+", r"[./]", r"[-Xu]"),
        (r"\s+-\s+", r"[-]", r"[Xu]"),
        ("-", r"[./]", r"[Xu]"),
    ];
    let mut patterns = Vec::new();
    for (date_sep, component_sep, missing) in families {
        patterns.push(format!(
            "(?i)^{}{date_sep}{}$",
            xx_side_ymd(component_sep, missing, ""),
            xx_side_ymd(component_sep, missing, "2")
        ));
        patterns.push(format!(
            "(?i)^{}{date_sep}{}$",
            xx_side_dmy(component_sep, missing, ""),
            xx_side_dmy(component_sep, missing, "2")
        ));
    }
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

fn group<'t>(caps: &Captures<'t>, base: &str, suffix: &str) -> Option<&'t str> {
    caps.name(&format!("{base}{suffix}")).map(|m| m.as_str())
}

fn interval_unless_ambiguous(start: Instant, end: Instant, match_id: MatchId) -> Option<ExtractedDate> {
    if matches!(end, Instant::Unspecified) {
        if let Some(date) = start.date_part() {
            if date.year() < 1000 {
                return None;
            }
        }
    }
    Some(ExtractedDate::new(
        match_id,
        EdtfDate::Interval(Interval::new(start, end)),
    ))
}

/// Plain numeric ranges: "1941/1942", "22.6.1941 - 25.9.1941", "1907/?".
pub struct NumericRangeExtractor;

impl DateExtractor for NumericRangeExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let trimmed = input.trim();
        let caps = PLAIN_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(trimmed))?;
        interval_unless_ambiguous(
            plain_instant(&caps, "")?,
            plain_instant(&caps, "2")?,
            MatchId::NumericRangeAllVariants,
        )
    }
}

fn trim_component_separator(component: &str) -> &str {
    component.trim_matches(|c| matches!(c, '-' | '.' | '/'))
}

fn plain_instant(caps: &Captures<'_>, suffix: &str) -> Option<Instant> {
    if group(caps, "unspecified", suffix).is_some() {
        return Some(Instant::Unspecified);
    }
    let year: i32 = group(caps, "year", suffix)?.parse().ok()?;
    let uncertain = group(caps, "uncertain", suffix).is_some();
    let (month, day) = resolve_month_and_day(
        group(caps, "month", suffix).map(trim_component_separator),
        group(caps, "day", suffix).map(trim_component_separator),
    );
    let mut date = DatePart::of_year(year).with_uncertain(uncertain);
    if let Some(month) = month {
        date = date.with_month(month.parse().ok()?);
    }
    if let Some(day) = day {
        date = date.with_day(day.parse().ok()?);
    }
    Some(Instant::from_date(date))
}

/// Numeric ranges with unknown-component placeholders: "19XX/20XX",
/// "1871 - 191-", "1910/05/31 | 1910/05/01".
pub struct NumericRangeXxExtractor;

impl DateExtractor for NumericRangeXxExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let caps = XX_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(input))?;
        interval_unless_ambiguous(
            xx_instant(&caps, "")?,
            xx_instant(&caps, "2")?,
            MatchId::NumericRangeAllVariantsXx,
        )
    }
}

fn strip_placeholders(component: &str) -> String {
    component
        .chars()
        .filter(|c| !matches!(c.to_ascii_uppercase(), 'X' | 'U' | '?' | '-' | '.' | '/'))
        .collect()
}

fn xx_instant(caps: &Captures<'_>, suffix: &str) -> Option<Instant> {
    if group(caps, "unspecified", suffix).is_some() {
        return Some(Instant::Unspecified);
    }
    let year_raw = group(caps, "year", suffix)?;
    let trailing_unknown = year_raw
        .chars()
        .rev()
        .take_while(|c| matches!(c.to_ascii_uppercase(), 'X' | 'U' | '?' | '-'))
        .count();
    let (year, precision) = if trailing_unknown == 0 {
        (year_raw.parse::<i32>().ok()?, None)
    } else {
        let digits = &year_raw[..year_raw.len() - trailing_unknown];
        // two placeholder digits name a century, one a decade
        if trailing_unknown == 2 {
            (digits.parse::<i32>().ok()? * 100, Some(YearPrecision::Century))
        } else {
            (digits.parse::<i32>().ok()? * 10, Some(YearPrecision::Decade))
        }
    };
    let month = group(caps, "month", suffix).map(strip_placeholders);
    let day = group(caps, "day", suffix).map(strip_placeholders);
    let (month, day) = resolve_month_and_day(
        month.as_deref().filter(|m| !m.is_empty()),
        day.as_deref().filter(|d| !d.is_empty()),
    );
    let mut date = DatePart::of_year(year).with_year_precision(precision);
    if let Some(month) = month {
        date = date.with_month(month.parse().ok()?);
    }
    if let Some(day) = day {
        date = date.with_day(day.parse().ok()?);
    }
    Some(Instant::from_date(date))
}
