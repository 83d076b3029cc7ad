//! Calendar date component of an EDTF point.

use serde::Serialize;
use std::fmt;

/// Precision of the year of a [`DatePart`].
///
/// A decade-precision year stands for the ten years starting at the stored
/// year ("193X"), a century-precision year for one hundred ("19XX").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YearPrecision {
    Year,
    Decade,
    Century,
}

impl YearPrecision {
    /// Number of years covered by a year of this precision.
    pub fn duration(self) -> i32 {
        match self {
            YearPrecision::Year => 1,
            YearPrecision::Decade => 10,
            YearPrecision::Century => 100,
        }
    }

    /// Maps a count of unknown trailing year characters ("193X" has one,
    /// "19XX" has two) to a precision. Zero means the year is exact.
    pub fn from_unknown_digits(count: usize) -> Option<YearPrecision> {
        match count {
            1 => Some(YearPrecision::Decade),
            2 => Some(YearPrecision::Century),
            _ => None,
        }
    }
}

/// A calendar date with optional month and day, a year precision tag and
/// approximate/uncertain qualifier flags.
///
/// Construction normalizes the impossible shapes away: a zero month or day
/// is treated as absent, and a day can only be attached when a month is
/// present. The qualifier flags never affect calendrical validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatePart {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    year_precision: Option<YearPrecision>,
    approximate: bool,
    uncertain: bool,
}

impl DatePart {
    /// A year-only date with no qualifiers.
    pub fn of_year(year: i32) -> DatePart {
        DatePart {
            year,
            month: None,
            day: None,
            year_precision: None,
            approximate: false,
            uncertain: false,
        }
    }

    /// Sets the month; zero clears it (and any day with it).
    pub fn with_month(mut self, month: u32) -> DatePart {
        self.month = if month == 0 { None } else { Some(month) };
        if self.month.is_none() {
            self.day = None;
        }
        self
    }

    /// Sets the day; zero clears it. Ignored when no month is present.
    pub fn with_day(mut self, day: u32) -> DatePart {
        if self.month.is_some() {
            self.day = if day == 0 { None } else { Some(day) };
        }
        self
    }

    pub fn with_year_precision(mut self, precision: Option<YearPrecision>) -> DatePart {
        self.year_precision = precision;
        self
    }

    pub fn with_approximate(mut self, approximate: bool) -> DatePart {
        self.approximate = approximate;
        self
    }

    pub fn with_uncertain(mut self, uncertain: bool) -> DatePart {
        self.uncertain = uncertain;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn year_precision(&self) -> Option<YearPrecision> {
        self.year_precision
    }

    pub fn approximate(&self) -> bool {
        self.approximate
    }

    pub fn uncertain(&self) -> bool {
        self.uncertain
    }

    /// Returns a new value with day and month transposed, keeping the year,
    /// precision and qualifier flags. Values without both components are
    /// returned unchanged: there is nothing to transpose, and dropping the
    /// one component present would silently repair an unfixable value.
    pub fn switch_day_and_month(self) -> DatePart {
        match (self.month, self.day) {
            (Some(month), Some(day)) => DatePart {
                month: Some(day),
                day: Some(month),
                ..self
            },
            _ => self,
        }
    }

    /// The earliest concrete calendar day consistent with this value.
    ///
    /// Years outside the four-digit range stay year-only; precision years
    /// expand to their first covered year. Century counting starts the year
    /// after the stored boundary ("19XX" begins on 1901-01-01).
    pub fn first_day(&self) -> DatePart {
        if self.year.abs() > 9999 {
            return DatePart::of_year(self.year);
        }
        match self.year_precision {
            Some(YearPrecision::Century) => {
                DatePart::of_year(self.year + 1).with_month(1).with_day(1)
            }
            Some(YearPrecision::Decade) => DatePart::of_year(self.year).with_month(1).with_day(1),
            _ => DatePart::of_year(self.year)
                .with_month(self.month.unwrap_or(1))
                .with_day(self.day.unwrap_or(1)),
        }
    }

    /// The latest concrete calendar day consistent with this value.
    pub fn last_day(&self) -> DatePart {
        if self.year.abs() > 9999 {
            return DatePart::of_year(self.year);
        }
        match self.year_precision {
            Some(YearPrecision::Century) => {
                DatePart::of_year(self.year + 100).with_month(12).with_day(31)
            }
            Some(YearPrecision::Decade) => {
                DatePart::of_year(self.year + 9).with_month(12).with_day(31)
            }
            _ => {
                let month = self.month.unwrap_or(12);
                let day = self.day.unwrap_or_else(|| days_in_month(self.year, month));
                DatePart::of_year(self.year).with_month(month).with_day(day)
            }
        }
    }
}

/// Proleptic Gregorian leap year check on the ISO year number.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month, with February adjusted for leap years.
/// Months outside 1..=12 are given the permissive 31 so that range checks
/// stay the validator's job.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year.abs() > 9999 {
            write!(f, "Y{}", self.year)?;
        } else {
            match self.year_precision {
                Some(YearPrecision::Decade) => write!(f, "{:03}X", self.year / 10)?,
                Some(YearPrecision::Century) => write!(f, "{:02}XX", self.year / 100)?,
                _ => {
                    if self.year < 0 {
                        write!(f, "-{:04}", -self.year)?;
                    } else {
                        write!(f, "{:04}", self.year)?;
                    }
                }
            }
            if let Some(month) = self.month {
                write!(f, "-{:02}", month)?;
                if let Some(day) = self.day {
                    write!(f, "-{:02}", day)?;
                }
            }
        }
        if self.approximate && self.uncertain {
            write!(f, "%")?;
        } else if self.approximate {
            write!(f, "~")?;
        } else if self.uncertain {
            write!(f, "?")?;
        }
        Ok(())
    }
}
