//! Dashboard greeting and daily quote

use chrono::{Datelike, NaiveDate};

const QUOTES: &[&str] = &[
    "You're doing great!",
    "Take a deep breath.",
    "One step at a time.",
    "You matter.",
    "Progress, not perfection.",
    "Be kind to yourself.",
    "Every moment is a fresh beginning.",
    "You are stronger than you think.",
    "Small steps lead to big changes.",
    "Your feelings are valid.",
];

/// Greeting for an hour of the day (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning!"
    } else if hour < 18 {
        "Good Afternoon!"
    } else {
        "Good Evening!"
    }
}

/// Quote of the day; the same date always yields the same quote
pub fn quote_for_date(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}
