//! Ordering over time values.
//!
//! `Ord` is deliberately not implemented: derived equality is raw field
//! equality, while [`TimeValue::compare`] equates equal instants expressed
//! in different zones, and the two must remain distinguishable.

use std::cmp::Ordering;

use chrono_tz::Tz;

use crate::TimeValue;

/// Lexicographic field key; DATE time-of-day reads as zero.
fn sort_key(t: &TimeValue) -> (i32, i32, i32, i32, i32, i32) {
    if t.is_date {
        (t.year, t.month, t.day, 0, 0, 0)
    } else {
        (t.year, t.month, t.day, t.hour, t.minute, t.second)
    }
}

impl TimeValue {
    /// Common-zone view used by the comparators: named zones convert to
    /// UTC, floating values keep their literal fields (they denote no
    /// absolute instant to convert).
    fn utc_view(self) -> Self {
        match self.zone {
            Some(z) if z != Tz::UTC => self.to_zone(Tz::UTC),
            _ => self.normalize(),
        }
    }

    /// ## Summary
    /// Totally orders two values by the instant they denote.
    ///
    /// Both operands are converted to UTC first, so equal instants in
    /// different zones compare as `Equal` even though they are `!=` under
    /// field equality. Floating values are compared by their literal
    /// fields.
    #[must_use]
    pub fn compare(self, other: Self) -> Ordering {
        sort_key(&self.utc_view()).cmp(&sort_key(&other.utc_view()))
    }

    /// Like [`TimeValue::compare`], but only the date parts are used, after
    /// converting both operands to UTC.
    #[must_use]
    pub fn compare_date_only(self, other: Self) -> Ordering {
        self.compare_date_only_in_zone(other, Tz::UTC)
    }

    /// ## Summary
    /// Date-only ordering in a caller-chosen zone.
    ///
    /// Both operands are converted to `zone` before truncating the
    /// time-of-day, so the comparison reflects the calendar date in that
    /// zone rather than in each value's source zone.
    #[must_use]
    pub fn compare_date_only_in_zone(self, other: Self, zone: Tz) -> Ordering {
        let a = self.to_zone(zone).normalize();
        let b = other.to_zone(zone).normalize();
        (a.year, a.month, a.day).cmp(&(b.year, b.month, b.day))
    }
}
