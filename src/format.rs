//! Dual-calendar date rendering.
//!
//! A raw date string carries no calendar marker, so the year decides: below
//! the threshold (1700 by default) it is a Hijri date and goes through the
//! closed-form converter, otherwise it is Gregorian and the configured
//! [`HijriCalendar`] supplies the Hijri side. Both sides are rendered in long
//! English form and joined, e.g. `"Muharram 1, 1446 AH / July 8, 2024"`.
//!
//! [`DualCalendarFormatter::try_format`] reports failures as [`FormatError`];
//! [`DualCalendarFormatter::format`] never fails and echoes its input instead.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::consts::{DATE_SEPARATOR, HIJRI_ERA, HIJRI_THRESHOLD_YEAR, MONTH_NAME_FORMAT, PAIR_SEPARATOR, TIME_DESIGNATOR};
use crate::provider::{DefaultCalendar, HijriCalendar};
use crate::{GregorianDate, HijriDate};

/// Naive timestamp layouts tried after RFC 3339 in the Gregorian branch
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a date string could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Nothing to format.
    #[error("Empty date string")]
    Empty,

    /// Fewer than three `-` separated components before the time part.
    #[error("Expected YYYY-MM-DD, found {found} component(s) in {input:?}")]
    MissingComponents { input: String, found: usize },

    /// A date component is not an integer.
    #[error("Invalid {component} component: {value:?}")]
    InvalidComponent { component: &'static str, value: String },

    /// The Gregorian branch could not read the string as a date.
    #[error("Unparseable Gregorian date: {0:?}")]
    UnparseableDate(String),

    /// A converted date falls outside the renderable range.
    #[error("Date out of renderable range: {0}")]
    OutOfRange(GregorianDate),

    /// The Hijri calendar provider could not place the date.
    #[error("{calendar} calendar failed: {reason}")]
    Provider { calendar: &'static str, reason: String },
}

/// Which calendar a raw date string is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCalendar {
    Hijri,
    Gregorian,
}

/// Formatter settings. The defaults reproduce the dashboard's rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    hijri_threshold: i64,
    separator:       String,
    era:             String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            hijri_threshold: HIJRI_THRESHOLD_YEAR,
            separator:       PAIR_SEPARATOR.to_owned(),
            era:             HIJRI_ERA.to_owned(),
        }
    }
}

impl FormatterConfig {
    /// Set the year below which input is read as Hijri.
    pub const fn with_hijri_threshold(mut self, year: i64) -> Self {
        self.hijri_threshold = year;
        self
    }

    /// Set the text placed between the Hijri and Gregorian renderings.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the era suffix appended to Hijri renderings.
    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = era.into();
        self
    }

    pub const fn hijri_threshold(&self) -> i64 {
        self.hijri_threshold
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn era(&self) -> &str {
        &self.era
    }

    /// Calendar a date string with this year is read as
    pub const fn classify(&self, year: i64) -> InputCalendar {
        if year < self.hijri_threshold {
            InputCalendar::Hijri
        } else {
            InputCalendar::Gregorian
        }
    }
}

/// Splits a date string into (year, month, day).
///
/// Everything from the first `T` on is dropped, the rest is split on `-` and
/// the first three components are read as integers. Extra components are
/// ignored.
///
/// # Errors
/// `Empty`, `MissingComponents` or `InvalidComponent`.
pub fn parse_components(input: &str) -> Result<(i64, i64, i64), FormatError> {
    if input.is_empty() {
        return Err(FormatError::Empty);
    }

    let date_part = input.split(TIME_DESIGNATOR).next().unwrap_or_default();
    let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
    if parts.len() < 3 {
        return Err(FormatError::MissingComponents {
            input: input.to_owned(),
            found: parts.len(),
        });
    }

    let number = |component: &'static str, value: &str| {
        value.trim().parse::<i64>().map_err(|_| FormatError::InvalidComponent {
            component,
            value: value.to_owned(),
        })
    };

    Ok((number("year", parts[0])?, number("month", parts[1])?, number("day", parts[2])?))
}

/// Reads the whole string as a Gregorian calendar day.
///
/// Offset timestamps are normalized to UTC before the day is taken.
///
/// # Errors
/// `UnparseableDate` if no supported layout matches.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc().date());
    }
    if let Some(timestamp) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
    {
        return Ok(timestamp.date());
    }
    NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT).map_err(|_| FormatError::UnparseableDate(input.to_owned()))
}

/// Long English Gregorian form, e.g. "October 5, 2025"
pub fn gregorian_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format(MONTH_NAME_FORMAT), date.day(), date.year())
}

/// Renders dates in both calendars.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct DualCalendarFormatter<C = DefaultCalendar> {
    config:   FormatterConfig,
    calendar: C,
}

impl DualCalendarFormatter {
    /// Formatter with default settings and [`DefaultCalendar`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: HijriCalendar> DualCalendarFormatter<C> {
    pub fn with_calendar(calendar: C) -> Self {
        Self {
            config: FormatterConfig::default(),
            calendar,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    /// `"<Month name> <day>, <year> AH"`, numeric month when outside 1-12
    pub fn hijri_long(&self, date: &HijriDate) -> String {
        format!("{} {}, {} {}", date.month_label(), date.day, date.year, self.config.era)
    }

    /// Renders `input` in both calendars.
    ///
    /// # Errors
    /// Any [`FormatError`]; see the variants for the cases.
    pub fn try_format(&self, input: &str) -> Result<String, FormatError> {
        let (year, month, day) = parse_components(input)?;

        let (hijri, gregorian) = match self.config.classify(year) {
            InputCalendar::Hijri => {
                let hijri = HijriDate::new(year, month, day);
                let converted = hijri.to_gregorian();
                let gregorian = converted.to_naive().ok_or(FormatError::OutOfRange(converted))?;
                (hijri, gregorian)
            },
            InputCalendar::Gregorian => {
                let gregorian = parse_gregorian(input)?;
                (self.calendar.from_gregorian(gregorian)?, gregorian)
            },
        };

        Ok(format!(
            "{}{}{}",
            self.hijri_long(&hijri),
            self.config.separator,
            gregorian_long(gregorian)
        ))
    }

    /// Renders `input` in both calendars, or returns it unchanged if that fails.
    pub fn format(&self, input: &str) -> String {
        self.try_format(input).unwrap_or_else(|error| {
            if error != FormatError::Empty {
                debug!(input, calendar = self.calendar.name(), %error, "date left unformatted");
            }
            input.to_owned()
        })
    }
}
