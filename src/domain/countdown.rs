use crate::domain::holiday::Holiday;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Result of a single countdown evaluation.
///
/// This is the single source of truth consumed by every display and
/// metadata path. Invariants: `is_today` implies `sleeps_until == 0`,
/// `sleeps_until >= 0`, and `target_date >= today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub sleeps_until: i64,
    pub is_today: bool,
    pub target_date: NaiveDate,
}

/// Calculate sleeps remaining until a holiday.
///
/// `today` is passed explicitly rather than read from an ambient clock,
/// so every consumer within one request can share the same snapshot and
/// the function stays pure. The same-day check runs before the rollover
/// check: the target only jumps to next year when this year's occurrence
/// is strictly in the past. Differences are counted in whole calendar
/// days, never elapsed hours, so DST transitions cannot skew the result.
pub fn compute_countdown(holiday: &Holiday, today: NaiveDate) -> Countdown {
    let candidate = holiday.occurrence_in(today.year());

    let is_today = candidate == today;

    let target_date = if candidate < today {
        holiday.occurrence_in(today.year() + 1)
    } else {
        candidate
    };

    let sleeps_until = if is_today {
        0
    } else {
        (target_date - today).num_days().max(0)
    };

    Countdown {
        sleeps_until,
        is_today,
        target_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holiday::HolidayTheme;

    fn christmas() -> Holiday {
        Holiday::new(
            "christmas",
            12,
            25,
            "christmas",
            "Merry Christmas!",
            HolidayTheme::Christmas,
            "home",
        )
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sleeps_from_august() {
        let result = compute_countdown(&christmas(), date(2024, 8, 8));
        assert_eq!(result.sleeps_until, 139);
        assert!(!result.is_today);
        assert_eq!(result.target_date, date(2024, 12, 25));
    }

    #[test]
    fn test_holiday_is_today() {
        let result = compute_countdown(&christmas(), date(2024, 12, 25));
        assert_eq!(result.sleeps_until, 0);
        assert!(result.is_today);
        assert_eq!(result.target_date, date(2024, 12, 25));
    }

    #[test]
    fn test_rolls_over_to_next_year_once_passed() {
        let result = compute_countdown(&christmas(), date(2024, 12, 30));
        assert_eq!(result.sleeps_until, 360);
        assert!(!result.is_today);
        assert_eq!(result.target_date, date(2025, 12, 25));
    }

    #[test]
    fn test_one_sleep_left() {
        let result = compute_countdown(&christmas(), date(2024, 12, 24));
        assert_eq!(result.sleeps_until, 1);
        assert!(!result.is_today);
    }

    #[test]
    fn test_leap_year_day_count() {
        // 2024 is a leap year; Feb 1 to Dec 25 crosses Feb 29
        let result = compute_countdown(&christmas(), date(2024, 2, 1));
        assert_eq!(result.sleeps_until, 328);
    }
}
