//! Hijri/Gregorian date utilities for the fleet dashboard.
//!
//! Stored dates (licence expiries, residency permits) arrive as bare
//! `YYYY-MM-DD` strings that may be in either calendar. [`format_license_expiry`]
//! renders them in both, and [`format_plate_number`] spaces out vehicle plates
//! for display. The closed-form converter behind the Hijri branch lives in
//! [`convert`]; user preferences are handled by [`settings`].

mod consts;
pub mod convert;
pub mod format;
mod plate;
mod prelude;
pub mod provider;
pub mod settings;
mod types;

pub use consts::*;
pub use convert::{gregorian_from_julian_day, hijri_from_julian_day, hijri_to_gregorian, julian_day};
pub use format::{DualCalendarFormatter, FormatError, FormatterConfig, InputCalendar};
pub use plate::format_plate_number;
pub use provider::{DefaultCalendar, Fallback, HijriCalendar, Tabular, UmmAlQura};
pub use settings::{JsonFileStore, Locale, MemoryStore, Settings, SettingsError, SettingsStore, Theme};
pub use types::{GregorianDate, HijriDate, HijriMonth, month_label};

/// Renders a date string as `"<Hijri> / <Gregorian>"`.
///
/// Years below 1700 are read as Hijri and converted with the closed-form
/// arithmetic; later years are read as Gregorian and placed in the Umm al-Qura
/// calendar, or the tabular calendar outside the Umm al-Qura tables. Anything
/// that cannot be rendered comes back unchanged, and the empty string maps to
/// itself.
pub fn format_license_expiry(date: &str) -> String {
    DualCalendarFormatter::new().format(date)
}
