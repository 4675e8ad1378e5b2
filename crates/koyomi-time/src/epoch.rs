//! Conversion between calendar fields and UNIX epoch seconds.

use chrono::Utc;
use chrono_tz::Tz;

use crate::TimeValue;
use crate::math;

impl TimeValue {
    /// ## Summary
    /// Returns the value as seconds past the UNIX epoch, reading the
    /// wall-clock fields as UTC.
    ///
    /// This probably won't do what you expect unless the value is already
    /// in UTC (or floating): no conversion is performed, so a named-zone
    /// value yields the epoch count of its *wall-clock reading*, not of the
    /// instant it denotes. Convert first, or use
    /// [`TimeValue::as_epoch_in_zone`]. The null sentinel yields 0.
    #[must_use]
    pub fn as_epoch(self) -> i64 {
        if self.is_null() {
            return 0;
        }
        let t = self.normalize();
        math::days_from_civil(t.year, t.month, t.day) * 86_400
            + i64::from(t.hour) * 3600
            + i64::from(t.minute) * 60
            + i64::from(t.second)
    }

    /// Returns the value as seconds past the UNIX epoch after converting it
    /// to `zone`. With `None`, no conversion is done and the fields are
    /// read as they are, exactly as [`TimeValue::as_epoch`].
    #[must_use]
    pub fn as_epoch_in_zone(self, zone: Option<Tz>) -> i64 {
        match zone {
            Some(z) => self.to_zone(z).as_epoch(),
            None => self.as_epoch(),
        }
    }

    /// ## Summary
    /// Constructs a value from seconds past the UNIX epoch.
    ///
    /// The count is decomposed proleptically as UTC, then converted into
    /// `zone` if one is given; `None` yields a floating value carrying the
    /// UTC reading. With `is_date`, the result is a DATE: the flag is set
    /// and the time-of-day is dropped after any zone conversion, so the
    /// result is the calendar day the instant falls on *in that zone*.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "rem_euclid(86_400) bounds the time-of-day before narrowing"
    )]
    pub fn from_epoch(seconds: i64, is_date: bool, zone: Option<Tz>) -> Self {
        let days = seconds.div_euclid(86_400);
        let tod = seconds.rem_euclid(86_400);
        let (year, month, day) = math::civil_from_days(days);

        let mut t = Self::floating(
            year,
            month,
            day,
            (tod / 3600) as i32,
            (tod / 60 % 60) as i32,
            (tod % 60) as i32,
        );
        if let Some(z) = zone {
            t.zone = Some(Tz::UTC);
            t = t.to_zone(z);
        }
        if is_date {
            t.is_date = true;
            t.hour = 0;
            t.minute = 0;
            t.second = 0;
        }
        t
    }

    /// Returns the current time in the given zone (`None` for a floating
    /// value carrying the UTC reading). Reads the external wall clock.
    #[must_use]
    pub fn now(zone: Option<Tz>) -> Self {
        Self::from_epoch(Utc::now().timestamp(), false, zone)
    }

    /// Returns the current day in the given zone, with `is_date` set.
    #[must_use]
    pub fn today(zone: Option<Tz>) -> Self {
        Self::from_epoch(Utc::now().timestamp(), true, zone)
    }
}
