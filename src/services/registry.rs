use crate::domain::errors::DomainResult;
use crate::domain::holiday::{Holiday, HolidayTheme};
use std::collections::BTreeMap;

/// Slug-keyed library of the holidays this site counts down to.
///
/// Built once at startup; lookups are the only operation afterwards.
/// Christmas is the default holiday and lives at the site root.
pub struct HolidayRegistry {
    holidays: BTreeMap<String, Holiday>,
    default: Holiday,
}

impl HolidayRegistry {
    /// Registry with the built-in holidays.
    pub fn built_in() -> DomainResult<Self> {
        let christmas = Holiday::new(
            "christmas",
            12,
            25,
            "christmas",
            "Merry Christmas!",
            HolidayTheme::Christmas,
            "home",
        )?;
        let halloween = Holiday::new(
            "halloween",
            10,
            31,
            "halloween",
            "Happy Halloween!",
            HolidayTheme::Halloween,
            "smile",
        )?;
        let valentines = Holiday::new(
            "valentines-day",
            2,
            14,
            "valentine's day",
            "Happy Valentine's Day!",
            HolidayTheme::Valentines,
            "heart",
        )?;

        let mut holidays = BTreeMap::new();
        for holiday in [christmas.clone(), halloween, valentines] {
            holidays.insert(holiday.slug.clone(), holiday);
        }

        Ok(HolidayRegistry {
            holidays,
            default: christmas,
        })
    }

    /// Look up a holiday by its URL slug.
    pub fn get(&self, slug: &str) -> Option<&Holiday> {
        self.holidays.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.holidays.contains_key(slug)
    }

    /// All slugs in deterministic (sorted) order.
    pub fn slugs(&self) -> Vec<&str> {
        self.holidays.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The holiday served at the site root.
    pub fn default_holiday(&self) -> &Holiday {
        &self.default
    }
}
