//! EDTF-profile date value model
//!
//! The model is deliberately small: a point in time ([`Instant`]) or an
//! interval of two points ([`Interval`]), wrapped in the closed [`EdtfDate`]
//! enum. All types are immutable value types; every adjustment (qualifier
//! flags, day/month transposition, endpoint swap) returns a new value.
//!
//! Serialization to the EDTF string form goes through `Display`:
//!
//! ```text
//! 1942/1943    interval of two years
//! 18XX         century-precision year
//! 1712?        uncertain year
//! 1757~        approximate year
//! Y-500000     year outside the four-digit range
//! 1907/..      interval with an unspecified end
//! ```

pub mod date_part;
pub mod instant;
pub mod interval;
pub mod time_part;
pub mod validation;

pub use date_part::{DatePart, YearPrecision};
pub use instant::Instant;
pub use interval::Interval;
pub use time_part::TimePart;
pub use validation::validate;

use serde::Serialize;
use std::fmt;

/// A normalized date value: a single point or an interval of two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EdtfDate {
    Instant(Instant),
    Interval(Interval),
}

impl EdtfDate {
    /// True when the value carries a time of day and nothing else.
    pub fn is_time_only(&self) -> bool {
        match self {
            EdtfDate::Instant(instant) => instant.is_time_only(),
            EdtfDate::Interval(_) => false,
        }
    }

    /// Returns a copy with the approximate flag set on every date part.
    pub fn with_approximate(self, approximate: bool) -> EdtfDate {
        match self {
            EdtfDate::Instant(instant) => {
                EdtfDate::Instant(instant.with_approximate(approximate))
            }
            EdtfDate::Interval(interval) => {
                EdtfDate::Interval(interval.with_approximate(approximate))
            }
        }
    }

    /// Returns a copy with day and month transposed on every date part.
    /// Used only as a repair heuristic after validation fails.
    pub fn switch_day_and_month(self) -> EdtfDate {
        match self {
            EdtfDate::Instant(instant) => EdtfDate::Instant(instant.switch_day_and_month()),
            EdtfDate::Interval(interval) => {
                EdtfDate::Interval(interval.switch_day_and_month())
            }
        }
    }

    /// For intervals, returns a copy with start and end exchanged.
    /// Points are returned unchanged.
    pub fn swap_start_and_end(self) -> EdtfDate {
        match self {
            EdtfDate::Instant(_) => self,
            EdtfDate::Interval(interval) => EdtfDate::Interval(interval.swap_start_and_end()),
        }
    }
}

impl fmt::Display for EdtfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdtfDate::Instant(instant) => instant.fmt(f),
            EdtfDate::Interval(interval) => interval.fmt(f),
        }
    }
}
