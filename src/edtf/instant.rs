//! A single point on the timeline.

use crate::edtf::date_part::DatePart;
use crate::edtf::time_part::TimePart;
use serde::Serialize;
use std::fmt;

/// One endpoint of an interval, or a standalone point.
///
/// `Unknown` and `Unspecified` are the two distinct open-ended sentinels:
/// an unknown endpoint exists but was not recorded, an unspecified endpoint
/// is deliberately open (".." in EDTF). `Time` marks a value that carried a
/// time of day and no calendar date at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Instant {
    Unknown,
    Unspecified,
    Date {
        date: DatePart,
        time: Option<TimePart>,
    },
    Time(TimePart),
}

impl Instant {
    /// A date-only point.
    pub fn from_date(date: DatePart) -> Instant {
        Instant::Date { date, time: None }
    }

    pub fn from_date_and_time(date: DatePart, time: TimePart) -> Instant {
        Instant::Date { date, time: Some(time) }
    }

    pub fn is_time_only(&self) -> bool {
        matches!(self, Instant::Time(_))
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, Instant::Unknown | Instant::Unspecified)
    }

    pub fn date_part(&self) -> Option<DatePart> {
        match self {
            Instant::Date { date, .. } => Some(*date),
            _ => None,
        }
    }

    pub fn time_part(&self) -> Option<TimePart> {
        match self {
            Instant::Date { time, .. } => *time,
            Instant::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Returns a copy with the approximate flag set on the date part.
    /// Sentinels and time-only points are returned unchanged.
    pub fn with_approximate(self, approximate: bool) -> Instant {
        match self {
            Instant::Date { date, time } => Instant::Date {
                date: date.with_approximate(approximate),
                time,
            },
            other => other,
        }
    }

    pub fn with_uncertain(self, uncertain: bool) -> Instant {
        match self {
            Instant::Date { date, time } => Instant::Date {
                date: date.with_uncertain(uncertain),
                time,
            },
            other => other,
        }
    }

    pub fn switch_day_and_month(self) -> Instant {
        match self {
            Instant::Date { date, time } => Instant::Date {
                date: date.switch_day_and_month(),
                time,
            },
            other => other,
        }
    }

    /// The earliest concrete calendar day of this point, if it has one.
    pub fn first_day(&self) -> Option<DatePart> {
        self.date_part().map(|date| date.first_day())
    }

    /// The latest concrete calendar day of this point, if it has one.
    pub fn last_day(&self) -> Option<DatePart> {
        self.date_part().map(|date| date.last_day())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // An unknown endpoint renders as the empty string in EDTF.
            Instant::Unknown => Ok(()),
            Instant::Unspecified => write!(f, ".."),
            Instant::Date { date, .. } => date.fmt(f),
            // Times are never part of the normalized serialization.
            Instant::Time(_) => Ok(()),
        }
    }
}
