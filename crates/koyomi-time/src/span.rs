//! Free/busy spans over UTC instants.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::TimeValue;

/// A half-open interval `[start, end)` of UTC epoch seconds, tagged busy or
/// free for scheduling consumers.
///
/// Plain immutable value: no identity beyond its bounds and flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start of the span, inclusive (UTC epoch seconds).
    pub start: i64,
    /// End of the span, exclusive (UTC epoch seconds).
    pub end: i64,
    /// Busy time, as opposed to free time.
    pub is_busy: bool,
}

impl TimeSpan {
    /// ## Summary
    /// Builds a span from two endpoints, converting both to UTC epoch
    /// instants.
    ///
    /// A DATE start means the day's midnight; a DATE end is exclusive, per
    /// RFC 5545 `DTEND;VALUE=DATE`, so it contributes the midnight *after*
    /// that day. A null end yields a zero-length span, or the start's whole
    /// day when the start is a DATE.
    #[must_use]
    pub fn new(dtstart: TimeValue, dtend: TimeValue, is_busy: bool) -> Self {
        let start = dtstart.as_epoch_in_zone(Some(Tz::UTC));
        let end = if dtend.is_null() {
            if dtstart.is_date() { start + 86_400 } else { start }
        } else if dtend.is_date() {
            dtend.adjust(1, 0, 0, 0).as_epoch_in_zone(Some(Tz::UTC))
        } else {
            dtend.as_epoch_in_zone(Some(Tz::UTC))
        };
        Self {
            start,
            end,
            is_busy,
        }
    }

    /// Returns whether the two spans overlap. Half-open intersection:
    /// touching endpoints do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns whether `inner` lies entirely within this span.
    #[must_use]
    pub const fn contains(&self, inner: &Self) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }
}
