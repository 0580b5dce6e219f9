mod helpers;

use sleepstil::domain::holiday::HolidayTheme;
use sleepstil::{Holiday, HolidayRegistry};

#[test]
fn test_built_in_holidays() {
    let registry = HolidayRegistry::built_in().unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.slugs(),
        vec!["christmas", "halloween", "valentines-day"]
    );
}

#[test]
fn test_lookup_by_slug() {
    let registry = HolidayRegistry::built_in().unwrap();

    let halloween = registry.get("halloween").unwrap();
    assert_eq!(halloween.month, 10);
    assert_eq!(halloween.day, 31);

    let valentines = registry.get("valentines-day").unwrap();
    assert_eq!(valentines.name, "valentine's day");

    assert!(registry.get("arbor-day").is_none());
    assert!(!registry.contains("arbor-day"));
}

#[test]
fn test_default_holiday_is_christmas() {
    let registry = HolidayRegistry::built_in().unwrap();
    let default = registry.default_holiday();

    assert_eq!(default.slug, "christmas");
    assert_eq!(default.month, 12);
    assert_eq!(default.day, 25);
}

#[test]
fn test_descriptor_construction_rejects_invalid_dates() {
    let bad_month = Holiday::new(
        "bad",
        13,
        1,
        "bad",
        "nope",
        HolidayTheme::Default,
        "home",
    );
    assert!(bad_month.is_err());

    let bad_day = Holiday::new(
        "bad",
        4,
        31,
        "bad",
        "nope",
        HolidayTheme::Default,
        "home",
    );
    assert!(bad_day.is_err());
}
