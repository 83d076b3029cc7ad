//! Chronological validation of EDTF values.
//!
//! A pure predicate with no knowledge of why a value might be invalid:
//! fix-up policy (endpoint swap, day/month transposition) lives entirely in
//! the orchestrator. The functions here never panic.

use crate::edtf::date_part::{days_in_month, DatePart};
use crate::edtf::instant::Instant;
use crate::edtf::interval::Interval;
use crate::edtf::time_part::TimePart;
use crate::edtf::EdtfDate;

/// Checks calendrical and chronological consistency of a value.
pub fn validate(value: &EdtfDate) -> bool {
    match value {
        EdtfDate::Instant(instant) => validate_standalone(instant),
        EdtfDate::Interval(interval) => validate_interval(interval),
    }
}

fn validate_standalone(instant: &Instant) -> bool {
    match instant {
        // A standalone point must name an actual date.
        Instant::Unknown | Instant::Unspecified => false,
        Instant::Date { date, time } => {
            validate_date(date) && time.as_ref().map_or(true, validate_time)
        }
        Instant::Time(time) => validate_time(time),
    }
}

fn validate_date(date: &DatePart) -> bool {
    // When trailing year digits are unknown the month and day carry no
    // verifiable meaning, so range checks are skipped.
    if date.year_precision().is_some() {
        return true;
    }
    let month_valid = match date.month() {
        None => true,
        Some(month) => (1..=12).contains(&month),
    };
    let day_valid = match (date.month(), date.day()) {
        (_, None) => true,
        (Some(month), Some(day)) if (1..=12).contains(&month) => {
            day >= 1 && day <= days_in_month(date.year(), month)
        }
        _ => false,
    };
    month_valid && day_valid
}

fn validate_time(time: &TimePart) -> bool {
    time.hour <= 23 && time.minute <= 59 && time.second <= 59
}

fn validate_interval(interval: &Interval) -> bool {
    let start = interval.start();
    let end = interval.end();
    if !validate_endpoint(&start) || !validate_endpoint(&end) {
        return false;
    }
    // An interval with two open ends names nothing.
    if start.is_open_ended() && end.is_open_ended() {
        return false;
    }
    match (start.first_day(), end.last_day()) {
        (Some(first), Some(last)) => day_ordinal(&first) <= day_ordinal(&last),
        _ => true,
    }
}

fn validate_endpoint(instant: &Instant) -> bool {
    match instant {
        Instant::Unknown | Instant::Unspecified => true,
        Instant::Date { date, time } => {
            validate_date(date) && time.as_ref().map_or(true, validate_time)
        }
        Instant::Time(_) => false,
    }
}

fn day_ordinal(date: &DatePart) -> (i32, u32, u32) {
    (date.year(), date.month().unwrap_or(1), date.day().unwrap_or(1))
}
