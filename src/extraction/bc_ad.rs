//! Years with an era marker: "1986 AD", "75 B.C.", "337 BC - 283 BC".
//!
//! Recognized markers cover English (AD/BC), Italian and Spanish (d.C./a.C.),
//! Dutch (n.C./v.C.) and Greek (μ.Χ./π.Χ.) usage. A before-the-era year maps
//! to its negation.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

const ERA: &str = r"(?:a\.d\.|ad|d\.c\.|dc|nc|μ\.χ\.|b\.c\.|bc|a\.c\.|ac|vc|π\.χ\.)";

static SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^\s*(\d{{1,4}})\s*({ERA})\s*$")).unwrap());
static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(\d{{1,4}})\s*({ERA})\s*[-/]\s*(\d{{1,4}})\s*({ERA})\s*$"
    ))
    .unwrap()
});

fn is_before_era(marker: &str) -> bool {
    let normalized: String = marker
        .chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect();
    matches!(normalized.as_str(), "bc" | "ac" | "vc" | "πχ")
}

fn era_year(year: &str, marker: &str) -> Option<DatePart> {
    let year: i32 = year.parse().ok()?;
    let year = if is_before_era(marker) { -year } else { year };
    Some(DatePart::of_year(year))
}

pub struct BcAdExtractor;

impl DateExtractor for BcAdExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        if let Some(caps) = RANGE.captures(input) {
            let start = era_year(&caps[1], &caps[2])?;
            let end = era_year(&caps[3], &caps[4])?;
            return Some(ExtractedDate::new(
                MatchId::BcAd,
                EdtfDate::Interval(Interval::new(
                    Instant::from_date(start),
                    Instant::from_date(end),
                )),
            ));
        }
        let caps = SINGLE.captures(input)?;
        Some(ExtractedDate::new(
            MatchId::BcAd,
            EdtfDate::Instant(Instant::from_date(era_year(&caps[1], &caps[2])?)),
        ))
    }
}
