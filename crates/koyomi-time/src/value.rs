//! The calendar DATE / DATE-TIME value type.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::math;

/// A calendar date or date-time value (RFC 5545 §3.3.4, §3.3.5).
///
/// Represents either a whole calendar day (`is_date`) or a specific instant,
/// which may be floating (no zone), UTC, or anchored to a named timezone.
/// The zone is a borrowed handle into the compiled-in IANA registry
/// ([`chrono_tz::Tz`]); this crate never constructs or owns zone data, and
/// `Tz::UTC` is the distinguished UTC singleton, so [`TimeValue::is_utc`] is
/// a lookup rather than a flag.
///
/// Fields are plain signed integers so that out-of-range intermediates
/// (minute = 70, day = 0) are representable; [`TimeValue::normalize`] folds
/// them back into calendar-legal ranges. Derived equality is raw field
/// equality — two equal instants expressed in different zones are `!=` but
/// compare as equal under [`TimeValue::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeValue {
    /// Actual signed year, e.g. 2001. Astronomical numbering: year 0 exists.
    pub year: i32,
    /// 1 (January) to 12 (December) once normalized.
    pub month: i32,
    /// 1 to 28/29/30/31 depending on month, once normalized.
    pub day: i32,
    /// 0 to 23 once normalized. Meaning-free when `is_date` is set.
    pub hour: i32,
    /// 0 to 59 once normalized. Meaning-free when `is_date` is set.
    pub minute: i32,
    /// 0 to 59 once normalized. Meaning-free when `is_date` is set.
    pub second: i32,
    /// Whether this value denotes a whole day rather than an instant.
    pub is_date: bool,
    /// Advisory: the value was produced while DST was in effect.
    pub is_daylight: bool,
    /// Attached timezone, or `None` for floating time.
    pub zone: Option<Tz>,
}

impl TimeValue {
    /// Returns the null time sentinel, which indicates no time has been set.
    ///
    /// Distinct from an *invalid* value: the sentinel is deliberate, an
    /// invalid value is one whose fields fall outside calendar ranges.
    #[must_use]
    pub const fn null_time() -> Self {
        Self {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            is_date: false,
            is_daylight: false,
            zone: None,
        }
    }

    /// Returns the null date sentinel (null time with `is_date` set).
    #[must_use]
    pub const fn null_date() -> Self {
        Self {
            is_date: true,
            ..Self::null_time()
        }
    }

    /// Creates a DATE value (floating; dates carry no time-of-day).
    #[must_use]
    pub const fn date(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            is_date: true,
            ..Self::null_time()
        }
    }

    /// Creates a floating DATE-TIME: the same wall-clock reading in any zone.
    #[must_use]
    pub const fn floating(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            is_date: false,
            is_daylight: false,
            zone: None,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub const fn utc(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            zone: Some(Tz::UTC),
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    /// Creates a DATE-TIME anchored to a named timezone.
    #[must_use]
    pub const fn zoned(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        zone: Tz,
    ) -> Self {
        Self {
            zone: Some(zone),
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    /// Creates a DATE value from a year and a 1-based day-of-year.
    ///
    /// A day-of-year outside the year's range folds into the neighboring
    /// years, so `from_day_of_year(0, 2024)` is 2023-12-31.
    #[must_use]
    pub fn from_day_of_year(mut doy: i32, mut year: i32) -> Self {
        while doy < 1 {
            year -= 1;
            doy += math::days_in_year(year);
        }
        while doy > math::days_in_year(year) {
            doy -= math::days_in_year(year);
            year += 1;
        }
        let mut month = 1;
        while doy > math::days_in_month(month, year) {
            doy -= math::days_in_month(month, year);
            month += 1;
        }
        Self::date(year, month, doy)
    }

    /// ## Summary
    /// Creates a value from its iCalendar text form
    /// `YYYYMMDD[THHMMSS[Z]]`, delegating lexical scanning to chrono.
    ///
    /// Malformed input yields the null sentinel rather than an error;
    /// callers branch on [`TimeValue::is_null`].
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "chrono field accessors are bounded well below i32::MAX"
    )]
    pub fn from_ical(s: &str) -> Self {
        match s.len() {
            // 19970714
            8 => NaiveDate::parse_from_str(s, "%Y%m%d").map_or_else(
                |_e| Self::null_time(),
                |d| Self::date(d.year(), d.month() as i32, d.day() as i32),
            ),

            // 19970714T133000
            15 => NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S").map_or_else(
                |_e| Self::null_time(),
                |dt| {
                    Self::floating(
                        dt.year(),
                        dt.month() as i32,
                        dt.day() as i32,
                        dt.hour() as i32,
                        dt.minute() as i32,
                        dt.second() as i32,
                    )
                },
            ),

            // 19970714T133000Z
            16 => s.strip_suffix('Z').map_or_else(Self::null_time, |body| {
                match Self::from_ical(body) {
                    t if t.is_null() => t,
                    t => Self {
                        zone: Some(Tz::UTC),
                        ..t
                    },
                }
            }),

            _ => Self::null_time(),
        }
    }

    /// Returns whether this is the null sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.year == 0
            && self.month == 0
            && self.day == 0
            && self.hour == 0
            && self.minute == 0
            && self.second == 0
            && self.zone.is_none()
    }

    /// Returns whether all fields are within calendar-legal ranges.
    ///
    /// False for the null sentinel: a deliberately-unset value and a
    /// zero-initialized-but-unintended one must stay distinguishable, so
    /// callers check [`TimeValue::is_null`] first.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_null()
            && (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= math::days_in_month(self.month, self.year)
            && (0..=23).contains(&self.hour)
            && (0..=59).contains(&self.minute)
            && (0..=59).contains(&self.second)
    }

    /// Returns whether this is a DATE value (no time-of-day).
    #[must_use]
    pub const fn is_date(&self) -> bool {
        self.is_date
    }

    /// Returns whether this value is anchored to the UTC singleton.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        matches!(self.zone, Some(Tz::UTC))
    }

    /// Returns the attached zone handle, or `None` for floating time.
    #[must_use]
    pub const fn zone(&self) -> Option<Tz> {
        self.zone
    }

    /// Returns the 1-based day-of-year of this value's date.
    #[must_use]
    pub fn day_of_year(&self) -> i32 {
        let mut doy = self.day;
        for month in 1..self.month {
            doy += math::days_in_month(month, self.year);
        }
        doy
    }

    /// Returns the day of the week, with Sunday = 1 and Saturday = 7.
    ///
    /// Computed from the proleptic day count, so it is exact for any signed
    /// year.
    #[must_use]
    pub fn day_of_week(&self) -> i32 {
        math::day_of_week_from_days(math::days_from_civil(self.year, self.month, self.day))
    }

    /// ## Summary
    /// Returns the day-of-year of the first day of the week containing this
    /// value, where weeks start on `fdow` (1 = Sunday .. 7 = Saturday).
    ///
    /// The result may be ≤ 0 (week begins in the previous year) or greater
    /// than the year length (next year); interpretation is left to the
    /// caller.
    #[must_use]
    pub fn start_doy_week(&self, fdow: i32) -> i32 {
        let dow0 = self.day_of_week() - 1;
        let fdow0 = (fdow - 1).rem_euclid(7);
        self.day_of_year() - (dow0 - fdow0).rem_euclid(7)
    }

    /// Returns the ISO 8601 week number of this value's date.
    ///
    /// Weeks start on Monday and week 1 contains January 4th, so the first
    /// and last days of a year may fall in a week of the neighboring year.
    #[must_use]
    pub fn week_number(&self) -> i32 {
        let week = (self.start_doy_week(2) + 9) / 7;
        if week < 1 {
            math::iso_weeks_in_year(self.year - 1)
        } else if week > math::iso_weeks_in_year(self.year) {
            1
        } else {
            week
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)?;
        if !self.is_date {
            write!(f, "T{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
            if self.is_utc() {
                write!(f, "Z")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_vs_invalid() {
        let null = TimeValue::null_time();
        assert!(null.is_null());
        assert!(!null.is_valid());
        assert!(TimeValue::null_date().is_null());

        // Out-of-range fields are invalid, not null.
        let bad = TimeValue::date(2024, 13, 1);
        assert!(!bad.is_null());
        assert!(!bad.is_valid());
        let bad = TimeValue::date(2023, 2, 29);
        assert!(!bad.is_valid());

        assert!(TimeValue::date(2024, 2, 29).is_valid());
        assert!(TimeValue::utc(2024, 1, 7, 23, 59, 59).is_valid());
    }

    #[test]
    fn test_zone_forms() {
        assert!(TimeValue::utc(2024, 1, 7, 0, 0, 0).is_utc());
        assert!(!TimeValue::floating(2024, 1, 7, 0, 0, 0).is_utc());
        assert!(!TimeValue::zoned(2024, 1, 7, 0, 0, 0, Tz::America__New_York).is_utc());
        assert_eq!(TimeValue::floating(2024, 1, 7, 0, 0, 0).zone(), None);
    }

    #[test]
    fn test_day_of_week() {
        // 2024-01-07 was a Sunday.
        assert_eq!(TimeValue::date(2024, 1, 7).day_of_week(), 1);
        assert_eq!(TimeValue::date(2024, 1, 8).day_of_week(), 2);
        assert_eq!(TimeValue::date(2024, 1, 13).day_of_week(), 7);
        assert_eq!(TimeValue::date(1970, 1, 1).day_of_week(), 5);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(TimeValue::date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(TimeValue::date(2024, 3, 1).day_of_year(), 61);
        assert_eq!(TimeValue::date(2023, 3, 1).day_of_year(), 60);
        assert_eq!(TimeValue::date(2024, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn test_from_day_of_year() {
        assert_eq!(TimeValue::from_day_of_year(1, 2024), TimeValue::date(2024, 1, 1));
        assert_eq!(TimeValue::from_day_of_year(61, 2024), TimeValue::date(2024, 3, 1));
        assert_eq!(TimeValue::from_day_of_year(366, 2024), TimeValue::date(2024, 12, 31));
        // Out-of-range folds into the neighboring year.
        assert_eq!(TimeValue::from_day_of_year(0, 2024), TimeValue::date(2023, 12, 31));
        assert_eq!(TimeValue::from_day_of_year(367, 2024), TimeValue::date(2025, 1, 1));
        assert!(TimeValue::from_day_of_year(1, 2024).is_date());
    }

    #[test]
    fn test_start_doy_week() {
        let sunday = TimeValue::date(2024, 1, 7);
        // Week starting Sunday: the day itself.
        assert_eq!(sunday.start_doy_week(1), 7);
        // Week starting Monday: back to 2024-01-01.
        assert_eq!(sunday.start_doy_week(2), 1);
        // Early January may point into the previous year.
        assert_eq!(TimeValue::date(2023, 1, 1).start_doy_week(2), -5);
    }

    #[test]
    fn test_week_number() {
        assert_eq!(TimeValue::date(2024, 1, 7).week_number(), 1);
        assert_eq!(TimeValue::date(2024, 1, 8).week_number(), 2);
        // 2023-01-01 belongs to week 52 of 2022.
        assert_eq!(TimeValue::date(2023, 1, 1).week_number(), 52);
        // 2021-01-01 belongs to week 53 of 2020.
        assert_eq!(TimeValue::date(2021, 1, 1).week_number(), 53);
        // 2019-12-30 belongs to week 1 of 2020.
        assert_eq!(TimeValue::date(2019, 12, 30).week_number(), 1);
        assert_eq!(TimeValue::date(2020, 12, 31).week_number(), 53);
    }

    #[test]
    fn test_from_ical() {
        assert_eq!(TimeValue::from_ical("20240107"), TimeValue::date(2024, 1, 7));
        assert_eq!(
            TimeValue::from_ical("20240107T133000"),
            TimeValue::floating(2024, 1, 7, 13, 30, 0)
        );
        assert_eq!(
            TimeValue::from_ical("20240107T133000Z"),
            TimeValue::utc(2024, 1, 7, 13, 30, 0)
        );
    }

    #[test]
    fn test_from_ical_malformed() {
        for s in ["", "2024", "2024-01-07", "20241301", "20240107T256000", "20240107X133000Z", "not a date"] {
            assert!(TimeValue::from_ical(s).is_null(), "input {s:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeValue::date(2024, 1, 7).to_string(), "20240107");
        assert_eq!(
            TimeValue::floating(2024, 1, 7, 13, 30, 0).to_string(),
            "20240107T133000"
        );
        assert_eq!(
            TimeValue::utc(2024, 1, 7, 13, 30, 0).to_string(),
            "20240107T133000Z"
        );
        // Named zones carry no suffix in the text form; the TZID travels as
        // a parameter at the property layer.
        assert_eq!(
            TimeValue::zoned(2024, 1, 7, 13, 30, 0, Tz::America__New_York).to_string(),
            "20240107T133000"
        );
    }

    #[test]
    fn test_display_round_trip() {
        for t in [
            TimeValue::date(2024, 2, 29),
            TimeValue::floating(1999, 12, 31, 23, 59, 59),
            TimeValue::utc(1970, 1, 1, 0, 0, 0),
        ] {
            assert_eq!(TimeValue::from_ical(&t.to_string()), t);
        }
    }
}
