//! Field normalization and the arithmetic entry point.

use crate::TimeValue;
use crate::math;

impl TimeValue {
    /// ## Summary
    /// Folds out-of-range fields into their canonical ranges via carry
    /// arithmetic: seconds into minutes, minutes into hours, hours into
    /// days, days into months (re-reading the month length after every
    /// step, since it varies), and months into years.
    ///
    /// Idempotent: normalizing an already-normalized value is a no-op. The
    /// null sentinel passes through unchanged. Overflow is absorbed, never
    /// rejected, so callers can do raw field arithmetic and normalize after.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "time-of-day and day are folded into range before narrowing back to i32"
    )]
    pub fn normalize(self) -> Self {
        if self.is_null() {
            return self;
        }
        let mut t = self;

        // DATE values carry no time-of-day.
        if t.is_date {
            t.hour = 0;
            t.minute = 0;
            t.second = 0;
        }

        // Fold the time-of-day into whole days.
        let total =
            i64::from(t.second) + 60 * i64::from(t.minute) + 3600 * i64::from(t.hour);
        let mut day = i64::from(t.day) + total.div_euclid(86_400);
        let tod = total.rem_euclid(86_400);
        t.hour = (tod / 3600) as i32;
        t.minute = (tod / 60 % 60) as i32;
        t.second = (tod % 60) as i32;

        // Months into 1..=12, carrying whole years.
        let m0 = i64::from(t.month) - 1;
        t.year += m0.div_euclid(12) as i32;
        t.month = (m0.rem_euclid(12) + 1) as i32;

        // Day carry must step one month at a time.
        while day < 1 {
            t.month -= 1;
            if t.month == 0 {
                t.month = 12;
                t.year -= 1;
            }
            day += i64::from(math::days_in_month(t.month, t.year));
        }
        loop {
            let in_month = i64::from(math::days_in_month(t.month, t.year));
            if day <= in_month {
                break;
            }
            day -= in_month;
            t.month += 1;
            if t.month == 13 {
                t.month = 1;
                t.year += 1;
            }
        }
        t.day = day as i32;
        t
    }

    /// ## Summary
    /// Adds signed day/time deltas and returns the normalized result. This
    /// is the only arithmetic entry point; raw field addition without a
    /// normalize is never safe across month or year boundaries.
    ///
    /// Time-of-day deltas are ignored for DATE values. The null sentinel
    /// passes through unchanged. Deltas saturate at the `i32` field limits
    /// before carrying, which keeps the result defined at the extremes.
    #[must_use]
    pub fn adjust(self, days: i32, hours: i32, minutes: i32, seconds: i32) -> Self {
        if self.is_null() {
            return self;
        }
        let mut t = self;
        t.day = t.day.saturating_add(days);
        if !t.is_date {
            t.hour = t.hour.saturating_add(hours);
            t.minute = t.minute.saturating_add(minutes);
            t.second = t.second.saturating_add(seconds);
        }
        t.normalize()
    }
}
