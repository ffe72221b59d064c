//! Closed-form Hijri/Gregorian arithmetic.
//!
//! The forward transform is the civil (tabular) Hijri day count followed by the
//! Fliegel & Van Flandern Julian Day to Gregorian conversion. It is an
//! arithmetic approximation, not an astronomical calendar, and its output is
//! the reference: callers rely on these exact numbers.
//!
//! All divisions are floor divisions. Every divisor is a positive constant, so
//! `div_euclid` gives the same result as `floor(a / b)`. The forward transform
//! runs in `i128`: every `i64` component triple fits without overflow, and the
//! resulting Gregorian year can exceed `i64` at the extremes.

use chrono::{Datelike, NaiveDate};

use crate::consts::{GREGORIAN_CE_JD_OFFSET, HIJRI_CYCLE_DAYS, HIJRI_EPOCH_JD, HIJRI_EPOCH_OFFSET};
use crate::{GregorianDate, HijriDate};

/// Julian Day Number of a Hijri date under the civil arithmetic calendar.
///
/// No validation is done; out-of-range months or days shift the result
/// deterministically.
pub const fn julian_day(year: i64, month: i64, day: i64) -> i128 {
    let (year, month, day) = (year as i128, month as i128, day as i128);
    (11 * year + 3).div_euclid(30) + 354 * year + 30 * month - (month - 1).div_euclid(2)
        + day
        + HIJRI_EPOCH_JD as i128
        - HIJRI_EPOCH_OFFSET as i128
}

/// Proleptic Gregorian date of a Julian Day Number.
///
/// Month and day always land in 1-12 and 1-31.
pub const fn gregorian_from_julian_day(jd: i128) -> GregorianDate {
    let mut l = jd + 68_569;
    let n = (4 * l).div_euclid(146_097);
    l -= (146_097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1_461_001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    GregorianDate { year, month, day }
}

/// Converts a Hijri date to the proleptic Gregorian calendar.
///
/// Total over all `i64` inputs. Garbage in yields a deterministic, possibly
/// nonsensical date out.
pub const fn hijri_to_gregorian(year: i64, month: i64, day: i64) -> GregorianDate {
    gregorian_from_julian_day(julian_day(year, month, day))
}

impl HijriDate {
    /// Gregorian equivalent under the closed-form transform
    pub const fn to_gregorian(&self) -> GregorianDate {
        hijri_to_gregorian(self.year, self.month, self.day)
    }

    pub const fn julian_day(&self) -> i128 {
        julian_day(self.year, self.month, self.day)
    }
}

/// Civil arithmetic Hijri date of a Julian Day Number.
///
/// Exact inverse of [`julian_day`] for every real tabular Hijri date. The
/// Hijri year of any `i64` day number is far inside `i64`.
#[allow(clippy::cast_possible_truncation)]
pub const fn hijri_from_julian_day(jd: i64) -> HijriDate {
    let mut l = jd as i128 - HIJRI_EPOCH_JD as i128 + 10_632;
    let cycle = HIJRI_CYCLE_DAYS as i128;
    let n = (l - 1).div_euclid(cycle);
    l = l - cycle * n + 354;
    let j = (10_985 - l).div_euclid(5316) * (50 * l).div_euclid(17_719)
        + l.div_euclid(5670) * (43 * l).div_euclid(15_238);
    l = l - (30 - j).div_euclid(15) * (17_719 * j).div_euclid(50) - j.div_euclid(16) * (15_238 * j).div_euclid(43) + 29;
    let month = (24 * l).div_euclid(709);
    let day = l - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;

    HijriDate {
        year:  year as i64,
        month: month as i64,
        day:   day as i64,
    }
}

/// Julian Day Number of a proleptic Gregorian date.
pub fn julian_day_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + GREGORIAN_CE_JD_OFFSET
}

/// Whether a year of the civil arithmetic Hijri calendar has 355 days.
pub const fn is_tabular_leap_year(year: i64) -> bool {
    (14 + 11 * (year.rem_euclid(30))).rem_euclid(30) < 11
}

/// Length of a month in the civil arithmetic Hijri calendar: odd months have
/// 30 days, even months 29, and Dhu al-Hijjah gains a day in leap years.
pub const fn tabular_days_in_month(year: i64, month: i64) -> i64 {
    if month == 12 && is_tabular_leap_year(year) {
        30
    } else if month % 2 == 1 {
        30
    } else {
        29
    }
}
