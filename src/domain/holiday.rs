use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Visual theme identifier for a holiday.
///
/// Carries the four colors used by the social card and the
/// `theme-color` page metadata. Everything else about theming
/// (particles, CSS tokens) lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayTheme {
    Christmas,
    Halloween,
    Valentines,
    Default,
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

impl HolidayTheme {
    pub fn colors(&self) -> ThemeColors {
        match self {
            HolidayTheme::Christmas => ThemeColors {
                primary: "#add8e6",
                secondary: "#ffffff",
                text: "#ffffff",
                background: "#add8e6",
            },
            HolidayTheme::Halloween => ThemeColors {
                primary: "#000000",
                secondary: "#ff6b35",
                text: "#ffffff",
                background: "#000000",
            },
            HolidayTheme::Valentines => ThemeColors {
                primary: "#EBCEDA",
                secondary: "#ff69b4",
                text: "#ffffff",
                background: "#EBCEDA",
            },
            HolidayTheme::Default => ThemeColors {
                primary: "#ffffff",
                secondary: "#000000",
                text: "#000000",
                background: "#ffffff",
            },
        }
    }
}

/// A holiday's fixed calendar position and display text.
///
/// Immutable once constructed. Construction validates the calendar
/// ranges, so every `Holiday` in circulation can resolve a concrete
/// occurrence date in any year.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub slug: String,
    pub month: u32,
    pub day: u32,
    pub name: String,
    pub message: String,
    pub theme: HolidayTheme,
    pub icon_name: String,
}

impl Holiday {
    /// Create a validated holiday descriptor.
    ///
    /// Rejects out-of-range months and days that no year can contain
    /// (e.g. April 31). February 29 is accepted; see [`Holiday::occurrence_in`]
    /// for how it resolves in non-leap years.
    pub fn new(
        slug: impl Into<String>,
        month: u32,
        day: u32,
        name: impl Into<String>,
        message: impl Into<String>,
        theme: HolidayTheme,
        icon_name: impl Into<String>,
    ) -> DomainResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::ValidationError(format!(
                "month {} is out of range 1-12",
                month
            )));
        }
        let max_day = days_in_month_with_leap(month);
        if !(1..=max_day).contains(&day) {
            return Err(DomainError::ValidationError(format!(
                "day {} is out of range 1-{} for month {}",
                day, max_day, month
            )));
        }

        Ok(Holiday {
            slug: slug.into(),
            month,
            day,
            name: name.into(),
            message: message.into(),
            theme,
            icon_name: icon_name.into(),
        })
    }

    /// Concrete calendar date of this holiday in `year`.
    ///
    /// A February 29 holiday observes on February 28 in years without
    /// a leap day, so every year has exactly one occurrence.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, 28))
            .expect("validated month/day resolves in every year")
    }
}

/// Longest day count the month can have in any year.
fn days_in_month_with_leap(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}
