//! Gregorian to Hijri calendar providers.
//!
//! The formatter only needs one capability from a Hijri calendar: the Hijri
//! date of an already-Gregorian day. [`UmmAlQura`] answers from the Saudi
//! Umm al-Qura tables, which only cover roughly 1938 to 2076. [`Tabular`]
//! inverts the closed-form arithmetic in [`crate::convert`] and is total.
//! [`DefaultCalendar`] chains the two: tables where they exist, civil
//! arithmetic everywhere else.

use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate as UmmAlQuraDate;
use tracing::debug;

use crate::convert::{hijri_from_julian_day, julian_day_from_gregorian};
use crate::{FormatError, HijriDate};

/// Source of Hijri dates for Gregorian days.
pub trait HijriCalendar: Send + Sync {
    /// Short identifier used in errors and log events
    fn name(&self) -> &'static str;

    /// Hijri date of the given Gregorian day.
    ///
    /// # Errors
    /// Returns `FormatError::Provider` when the calendar cannot place the day.
    fn from_gregorian(&self, date: NaiveDate) -> Result<HijriDate, FormatError>;
}

/// Umm al-Qura calendar backed by the `hijri_date` tables.
///
/// Only covers the range of the published tables; days outside it are an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UmmAlQura;

impl HijriCalendar for UmmAlQura {
    fn name(&self) -> &'static str {
        "umm-al-qura"
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<HijriDate, FormatError> {
        let provider_error = |reason: String| FormatError::Provider {
            calendar: self.name(),
            reason,
        };

        let year = usize::try_from(date.year()).map_err(|_| provider_error(format!("year {} before CE", date.year())))?;
        let hd = UmmAlQuraDate::from_gr(year, date.month() as usize, date.day() as usize).map_err(|e| {
            debug!(calendar = self.name(), %date, "date outside Umm al-Qura tables");
            provider_error(e.to_string())
        })?;

        let component = |value: usize| {
            i64::try_from(value).map_err(|_| provider_error(format!("component {value} out of range")))
        };
        Ok(HijriDate::new(component(hd.year())?, component(hd.month())?, component(hd.day())?))
    }
}

/// Civil arithmetic (tabular) Hijri calendar.
///
/// Shares its epoch and leap-year cycle with the closed-form converter, so
/// `Tabular.from_gregorian(d.to_gregorian())` gives back `d` for real dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tabular;

impl HijriCalendar for Tabular {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<HijriDate, FormatError> {
        Ok(hijri_from_julian_day(julian_day_from_gregorian(date)))
    }
}

/// Asks `primary` first and `fallback` when the primary cannot place the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallback<P, F> {
    primary:  P,
    fallback: F,
}

impl<P: HijriCalendar, F: HijriCalendar> Fallback<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: HijriCalendar, F: HijriCalendar> HijriCalendar for Fallback<P, F> {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<HijriDate, FormatError> {
        self.primary.from_gregorian(date).or_else(|error| {
            debug!(primary = self.primary.name(), fallback = self.fallback.name(), %date, %error, "falling back");
            self.fallback.from_gregorian(date)
        })
    }
}

/// Umm al-Qura inside its tables, civil arithmetic outside them.
pub type DefaultCalendar = Fallback<UmmAlQura, Tabular>;
