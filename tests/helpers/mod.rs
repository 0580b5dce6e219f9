#![allow(dead_code)]

use chrono::NaiveDate;
use sleepstil::bootstrap::{build_app_state, AppState};
use sleepstil::config::Config;
use sleepstil::domain::holiday::HolidayTheme;
use sleepstil::Holiday;

pub fn christmas() -> Holiday {
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

pub fn halloween() -> Holiday {
    Holiday::new(
        "halloween",
        10,
        31,
        "halloween",
        "Happy Halloween!",
        HolidayTheme::Halloween,
        "smile",
    )
    .unwrap()
}

pub fn leap_day() -> Holiday {
    Holiday::new(
        "leap-day",
        2,
        29,
        "leap day",
        "Happy Leap Day!",
        HolidayTheme::Default,
        "smile",
    )
    .unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        base_url: "https://sleepstilchristmas.com".to_string(),
        site_name: "sleeps 'til christmas".to_string(),
        timezone: chrono_tz::UTC,
    }
}

pub fn test_state() -> AppState {
    build_app_state(test_config()).unwrap()
}
