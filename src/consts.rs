/// Inputs with a year below this are read as Hijri, everything else as Gregorian
pub const HIJRI_THRESHOLD_YEAR: i64 = 1700;

/// Julian Day of 1 Muharram 1 AH in the civil arithmetic calendar
pub const HIJRI_EPOCH_JD: i64 = 1_948_440;

/// Offset subtracted from the epoch by the closed-form Hijri day count
pub(crate) const HIJRI_EPOCH_OFFSET: i64 = 385;

/// Days in a 30-year tabular Hijri cycle (19 common years of 354 + 11 leap years of 355)
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;

/// Julian Day of 0001-01-01 in the proleptic Gregorian calendar, minus one
pub(crate) const GREGORIAN_CE_JD_OFFSET: i64 = 1_721_425;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separates the date from the time in an ISO timestamp
pub const TIME_DESIGNATOR: char = 'T';
/// Default separator between the Hijri and Gregorian renderings
pub const PAIR_SEPARATOR: &str = " / ";
/// Default era suffix for Hijri renderings (Anno Hegirae)
pub const HIJRI_ERA: &str = "AH";

/// Full English month name, the first part of "October 5, 2025"
pub(crate) const MONTH_NAME_FORMAT: &str = "%B";

/// English Hijri month names (index 0 is Muharram, month 1)
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];
