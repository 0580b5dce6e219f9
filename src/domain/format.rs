//! Human-readable strings derived from a countdown evaluation.
//!
//! Pluralization is strictly `count == 1` singular, everything else
//! plural; zero never reaches the plural branch on display paths
//! because the `is_today` branch is checked first.

use crate::domain::countdown::Countdown;
use crate::domain::holiday::Holiday;

/// Title used in page titles and social cards.
pub fn countdown_title(countdown: &Countdown, holiday: &Holiday) -> String {
    if countdown.is_today {
        format!("Today is {}!", holiday.name)
    } else if countdown.sleeps_until == 1 {
        format!("1 Sleep Until {}", holiday.name)
    } else {
        format!("{} Sleeps Until {}", countdown.sleeps_until, holiday.name)
    }
}

/// SEO description embedding the current countdown.
pub fn holiday_description(countdown: &Countdown, holiday: &Holiday) -> String {
    if countdown.is_today {
        format!("Today is {}! {}", holiday.name, holiday.message)
    } else if countdown.sleeps_until == 1 {
        format!("Only 1 sleep left until {}! {}", holiday.name, holiday.message)
    } else {
        format!(
            "{} sleeps until {}! Track the countdown and get ready to celebrate.",
            countdown.sleeps_until, holiday.name
        )
    }
}

/// Label shown under the on-screen countdown number.
///
/// On the holiday itself the label is the holiday message alone and no
/// number is shown.
pub fn display_label(countdown: &Countdown, holiday: &Holiday) -> String {
    if countdown.is_today {
        holiday.message.clone()
    } else if countdown.sleeps_until == 1 {
        format!("sleep 'til {}", holiday.name)
    } else {
        format!("sleeps 'til {}", holiday.name)
    }
}

/// Short caption rendered on the social card.
pub fn card_caption(sleeps: i64) -> String {
    match sleeps {
        0 => "Today!".to_string(),
        1 => "1 Sleep Left".to_string(),
        n => format!("{} Sleeps", n),
    }
}

/// Headline rendered on the social card.
pub fn card_headline(sleeps: i64, holiday: &Holiday) -> String {
    if sleeps == 0 {
        format!("Today is {}!", holiday.name)
    } else {
        format!("{} Until {}", card_caption(sleeps), holiday.name)
    }
}
