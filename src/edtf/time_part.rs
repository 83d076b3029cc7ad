//! Time-of-day component of an EDTF point.
//!
//! Times are accepted by a few extractors (EDTF literals with a `T` part,
//! long formatted timestamps) but never rendered: normalization targets
//! calendar dates, so the time survives only for validation and for the
//! time-only check in date-property mode.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePart {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimePart {
    pub fn new(hour: u32, minute: u32, second: u32) -> TimePart {
        TimePart { hour, minute, second }
    }
}
