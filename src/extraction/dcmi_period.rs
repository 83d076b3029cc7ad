//! DCMI period encoding: "name=The Great Depression; start=1929; end=1939;".
//!
//! Properties are semicolon-separated "key=value" pairs. Only the W3C-DTF
//! scheme is supported (it is also the default). A missing start or end is
//! an open interval edge, but at least one of the two must be present. A
//! repeated property or an unparseable date makes the whole value
//! unrecognizable.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static W3C_DTF_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d{4})(?:-(\d{2})(?:-(\d{2}))?)?$").unwrap());

pub struct DcmiPeriodExtractor;

impl DateExtractor for DcmiPeriodExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let mut start: Option<&str> = None;
        let mut end: Option<&str> = None;
        let mut name: Option<&str> = None;
        let mut scheme: Option<&str> = None;
        for property in input.split(';') {
            let Some((key, value)) = property.split_once('=') else {
                continue;
            };
            let value = value.trim();
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "start" => &mut start,
                "end" => &mut end,
                "name" => &mut name,
                "scheme" => &mut scheme,
                _ => continue,
            };
            if slot.replace(value).is_some() {
                return None;
            }
        }
        if let Some(scheme) = scheme {
            if !scheme.eq_ignore_ascii_case("W3C-DTF") && !scheme.eq_ignore_ascii_case("W3CDTF") {
                return None;
            }
        }
        if start.is_none() && end.is_none() {
            return None;
        }
        let date = EdtfDate::Interval(Interval::new(
            parse_edge(start)?,
            parse_edge(end)?,
        ));
        let label = name.filter(|n| !n.is_empty()).map(str::to_string);
        Some(ExtractedDate::new(MatchId::DcmiPeriod, date).with_label(label))
    }
}

fn parse_edge(value: Option<&str>) -> Option<Instant> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Some(Instant::Unspecified);
    };
    // the time of day carries no information for a period edge
    let date_str = value.split_once('T').map_or(value, |(date, _)| date);
    let caps = W3C_DTF_DATE.captures(date_str)?;
    let mut date = DatePart::of_year(caps[1].parse().ok()?);
    if let Some(month) = caps.get(2) {
        date = date.with_month(month.as_str().parse().ok()?);
        if let Some(day) = caps.get(3) {
            date = date.with_day(day.as_str().parse().ok()?);
        }
    }
    Some(Instant::from_date(date))
}
