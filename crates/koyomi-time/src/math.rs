//! Proleptic Gregorian calendar arithmetic.
//!
//! Pure, stateless functions over plain integers. Years are signed and
//! astronomical (year 0 exists and precedes year 1), so every function here
//! is defined for the full `i32` year range with no era special-casing.

/// Returns whether the given year is a leap year.
///
/// Proleptic Gregorian rule: divisible by 4, except century years not
/// divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month (1 = January).
///
/// February consults [`is_leap_year`]. An out-of-range month yields 0;
/// callers normalize months before asking.
#[must_use]
pub const fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Returns the number of days in the given year (365 or 366).
#[must_use]
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian civil date.
///
/// Era-based civil-day algorithm; exact for any `i32` year, negative or
/// positive, without iterating.
#[expect(
    clippy::cast_lossless,
    reason = "i64::from is not usable in const fn; i32 to i64 widening is lossless"
)]
pub(crate) const fn days_from_civil(year: i32, month: i32, day: i32) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let m = month as i64;
    let d = day as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: (year, month, day) for a day count.
#[expect(
    clippy::cast_possible_truncation,
    reason = "year is bounded by the i64 day count divided by 365, month and day by the algorithm"
)]
pub(crate) const fn civil_from_days(days: i64) -> (i32, i32, i32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m as i32, d as i32)
}

/// Day of the week for a civil day count, with Sunday = 1 and Saturday = 7.
///
/// 1970-01-01 (day 0) was a Thursday; `rem_euclid` keeps the congruence
/// correct for dates before the epoch.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rem_euclid(7) bounds the result to 0..7"
)]
pub(crate) const fn day_of_week_from_days(days: i64) -> i32 {
    ((days + 4).rem_euclid(7) + 1) as i32
}

/// Number of ISO 8601 weeks in the given year (52 or 53).
///
/// A year has 53 weeks iff it starts on a Thursday, or is a leap year
/// starting on a Wednesday.
pub(crate) const fn iso_weeks_in_year(year: i32) -> i32 {
    let jan1 = day_of_week_from_days(days_from_civil(year, 1, 1));
    if jan1 == 5 || (is_leap_year(year) && jan1 == 4) {
        53
    } else {
        52
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        // Astronomical year 0 is divisible by 400.
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(1, 2024), 31);
        assert_eq!(days_in_month(4, 2024), 30);
        assert_eq!(days_in_month(13, 2024), 0);
        assert_eq!(days_in_month(0, 2024), 0);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(1900), 365);
    }

    #[test]
    fn test_civil_day_anchors() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2024, 1, 1), 19_723);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
    }

    #[test]
    fn test_civil_round_trip() {
        for days in [-1_000_000, -719_468, -1, 0, 1, 59, 60, 19_723, 1_000_000] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days, "day count {days}");
        }
    }

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(19_729), (2024, 1, 7));
    }

    #[test]
    fn test_day_of_week_epoch_is_thursday() {
        assert_eq!(day_of_week_from_days(0), 5);
        // 2024-01-07 was a Sunday.
        assert_eq!(day_of_week_from_days(days_from_civil(2024, 1, 7)), 1);
        assert_eq!(day_of_week_from_days(days_from_civil(2024, 1, 8)), 2);
    }

    #[test]
    fn test_iso_weeks_in_year() {
        assert_eq!(iso_weeks_in_year(2020), 53);
        assert_eq!(iso_weeks_in_year(2015), 53);
        assert_eq!(iso_weeks_in_year(2022), 52);
        assert_eq!(iso_weeks_in_year(2024), 52);
    }
}
