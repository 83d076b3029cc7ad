//! An interval of two points.

use crate::edtf::instant::Instant;
use serde::Serialize;
use std::fmt;

/// A date range. Both endpoints are full [`Instant`] values, so either side
/// may be a sentinel; the interval itself stores no duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    start: Instant,
    end: Instant,
}

impl Interval {
    pub fn new(start: Instant, end: Instant) -> Interval {
        Interval { start, end }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Returns a copy with start and end exchanged. Used as a repair
    /// heuristic for inverted ranges ("1999/1990").
    pub fn swap_start_and_end(self) -> Interval {
        Interval {
            start: self.end,
            end: self.start,
        }
    }

    pub fn with_approximate(self, approximate: bool) -> Interval {
        Interval {
            start: self.start.with_approximate(approximate),
            end: self.end.with_approximate(approximate),
        }
    }

    pub fn switch_day_and_month(self) -> Interval {
        Interval {
            start: self.start.switch_day_and_month(),
            end: self.end.switch_day_and_month(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}
