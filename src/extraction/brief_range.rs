//! Brief year ranges: "1990-1999", "2014/15".
//!
//! The end year may carry only its rightmost two digits, in which case it is
//! expanded into the start year's century. Two guards keep this pattern from
//! swallowing other conventions: a two-digit end must be greater than 12
//! (otherwise it is indistinguishable from a month) and greater than the
//! start year's last two digits; a full end year must be greater than the
//! start year (otherwise the string is left to the EDTF interval rules).
//!
//! This extractor must run before the EDTF one: most brief-range strings
//! also parse as EDTF year-month values that turn out calendrically invalid.
//! It is excluded in generic-property mode, where it false-positives too
//! easily on free text.

use crate::edtf::{DatePart, EdtfDate, Instant, Interval};
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use once_cell::sync::Lazy;
use regex::Regex;

static BRIEF_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\?)?(\d{3,4})[-/](\d{2,4})(\?)?$").unwrap());

pub struct BriefRangeExtractor;

impl DateExtractor for BriefRangeExtractor {
    fn extract(&self, input: &str) -> Option<ExtractedDate> {
        let caps = BRIEF_RANGE.captures(input.trim())?;
        let uncertain = caps.get(1).is_some() || caps.get(4).is_some();
        let start_year: i32 = caps[2].parse().ok()?;
        let end_digits = &caps[3];
        let end_year = if end_digits.len() == 2 {
            let end: i32 = end_digits.parse().ok()?;
            if end <= 12 || end <= start_year % 100 {
                return None;
            }
            (start_year / 100) * 100 + end
        } else {
            let end: i32 = end_digits.parse().ok()?;
            if end <= start_year {
                return None;
            }
            end
        };
        let start = DatePart::of_year(start_year).with_uncertain(uncertain);
        let end = DatePart::of_year(end_year).with_uncertain(uncertain);
        Some(ExtractedDate::new(
            MatchId::BriefDateRange,
            EdtfDate::Interval(Interval::new(
                Instant::from_date(start),
                Instant::from_date(end),
            )),
        ))
    }
}
