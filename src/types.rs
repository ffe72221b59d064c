use crate::consts::HIJRI_MONTH_NAMES;
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A Hijri (year, month, day) triple.
///
/// Components are not validated against Hijri month lengths; the closed-form
/// converter accepts whatever the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

impl HijriDate {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Month name for display, or the raw number when the month is outside 1-12
    pub fn month_label(&self) -> Cow<'static, str> {
        month_label(self.month)
    }
}

/// A proleptic Gregorian (year, month, day) triple as produced by the converter.
///
/// Kept as raw `i128` integers so conversion stays total for every `i64`
/// Hijri input; use [`GregorianDate::to_naive`] to get a calendar value that
/// can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    pub year:  i128,
    pub month: i128,
    pub day:   i128,
}

impl GregorianDate {
    pub const fn new(year: i128, month: i128, day: i128) -> Self {
        Self { year, month, day }
    }

    /// Returns the `chrono` date, or `None` if the triple is not a real date
    /// or lies outside chrono's supported range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year:  i128::from(date.year()),
            month: i128::from(date.month()),
            day:   i128::from(date.day()),
        }
    }
}

/// The twelve months of the Hijri year, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum HijriMonth {
    #[display(fmt = "Muharram")]
    Muharram,
    #[display(fmt = "Safar")]
    Safar,
    #[display(fmt = "Rabi' al-Awwal")]
    RabiAlAwwal,
    #[display(fmt = "Rabi' al-Thani")]
    RabiAlThani,
    #[display(fmt = "Jumada al-Ula")]
    JumadaAlUla,
    #[display(fmt = "Jumada al-Akhirah")]
    JumadaAlAkhirah,
    #[display(fmt = "Rajab")]
    Rajab,
    #[display(fmt = "Sha'ban")]
    Shaban,
    #[display(fmt = "Ramadan")]
    Ramadan,
    #[display(fmt = "Shawwal")]
    Shawwal,
    #[display(fmt = "Dhu al-Qi'dah")]
    DhuAlQidah,
    #[display(fmt = "Dhu al-Hijjah")]
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlUla,
        Self::JumadaAlAkhirah,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhuAlQidah,
        Self::DhuAlHijjah,
    ];

    /// Looks up a month by its 1-based number
    pub fn from_number(month: i64) -> Option<Self> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// English display name
    pub const fn name(self) -> &'static str {
        HIJRI_MONTH_NAMES[self as usize]
    }
}

pub fn month_label(month: i64) -> Cow<'static, str> {
    HijriMonth::from_number(month).map_or_else(|| Cow::Owned(month.to_string()), |m| Cow::Borrowed(m.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hijri_month_from_number_valid() {
        for (n, expected) in (1..=12).zip(HijriMonth::ALL) {
            assert_eq!(HijriMonth::from_number(n), Some(expected), "Month {n} should resolve");
        }
    }

    #[test]
    fn test_hijri_month_from_number_invalid() {
        for n in [0, 13, -1, i64::MAX, i64::MIN] {
            assert!(HijriMonth::from_number(n).is_none(), "Month {n} should not resolve");
        }
    }

    #[test]
    fn test_hijri_month_display_matches_name_table() {
        for month in HijriMonth::ALL {
            assert_eq!(month.to_string(), month.name());
        }
        assert_eq!(HijriMonth::Muharram.name(), "Muharram");
        assert_eq!(HijriMonth::RabiAlThani.name(), "Rabi' al-Thani");
        assert_eq!(HijriMonth::DhuAlHijjah.name(), "Dhu al-Hijjah");
    }

    #[test]
    fn test_month_label_fallback() {
        assert_eq!(month_label(9), "Ramadan");
        assert_eq!(month_label(13), "13");
        assert_eq!(month_label(0), "0");
        assert_eq!(month_label(-4), "-4");
    }

    #[test]
    fn test_hijri_date_display() {
        assert_eq!(HijriDate::new(1446, 1, 1).to_string(), "1446-01-01");
        assert_eq!(HijriDate::new(1446, 1, 1).month_label(), "Muharram");
    }

    #[test]
    fn test_gregorian_to_naive() {
        let date = GregorianDate::new(2024, 7, 8).to_naive();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 8));

        assert!(GregorianDate::new(2023, 2, 29).to_naive().is_none());
        assert!(GregorianDate::new(2024, 13, 1).to_naive().is_none());
        assert!(GregorianDate::new(i128::MAX, 1, 1).to_naive().is_none());
    }

    #[test]
    fn test_gregorian_from_naive() {
        let naive = NaiveDate::from_ymd_opt(2025, 10, 5).expect("valid date");
        assert_eq!(GregorianDate::from(naive), GregorianDate::new(2025, 10, 5));
    }

    #[test]
    fn test_serde() {
        let date = HijriDate::new(1447, 3, 15);
        let json = serde_json::to_string(&date).expect("failed to serialize Hijri date");
        assert_eq!(json, r#"{"year":1447,"month":3,"day":15}"#);

        let parsed: HijriDate = serde_json::from_str(&json).expect("failed to deserialize Hijri date");
        assert_eq!(date, parsed);
    }
}
