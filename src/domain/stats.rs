//! Aggregations behind the dashboard and analytics charts

use crate::domain::entry::{JournalEntry, Mood};
use crate::domain::sentiment::Sentiment;
use crate::domain::sleep::SleepLog;
use chrono::{Datelike, Duration, NaiveDate, TimeZone};

/// Number of recent entries shown in the intensity history
pub const INTENSITY_HISTORY_LEN: usize = 10;

/// Number of sleep logs shown in the sleep trend
pub const SLEEP_TREND_LEN: usize = 7;

/// Entry count per mood, in `Mood::ALL` order
pub fn mood_distribution(entries: &[JournalEntry]) -> Vec<(Mood, usize)> {
    Mood::ALL
        .iter()
        .map(|mood| (*mood, entries.iter().filter(|e| e.mood == *mood).count()))
        .collect()
}

/// Entry count per sentiment, in `Sentiment::ALL` order
pub fn sentiment_breakdown(entries: &[JournalEntry]) -> Vec<(Sentiment, usize)> {
    Sentiment::ALL
        .iter()
        .map(|s| (*s, entries.iter().filter(|e| e.sentiment == *s).count()))
        .collect()
}

/// Intensities of the most recent entries, oldest first.
///
/// "Most recent" means the front of the collection, which is newest first.
pub fn intensity_history<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Vec<(NaiveDate, u8)> {
    entries
        .iter()
        .take(INTENSITY_HISTORY_LEN)
        .rev()
        .map(|e| (e.day_in(tz), e.intensity.value()))
        .collect()
}

/// Hours of the last sleep logs, in logged order
pub fn sleep_trend<Tz: TimeZone>(logs: &[SleepLog], tz: &Tz) -> Vec<(NaiveDate, f64)> {
    let start = logs.len().saturating_sub(SLEEP_TREND_LEN);
    logs[start..]
        .iter()
        .map(|l| (l.date.with_timezone(tz).date_naive(), l.hours))
        .collect()
}

/// Entries per weekday (Monday first) for the week containing `today`
pub fn weekly_activity<Tz: TimeZone>(
    entries: &[JournalEntry],
    today: NaiveDate,
    tz: &Tz,
) -> [usize; 7] {
    let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let week_end = week_start + Duration::days(6);

    let mut counts = [0; 7];
    for day in entries.iter().map(|e| e.day_in(tz)) {
        if day >= week_start && day <= week_end {
            counts[day.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    counts
}

/// Mean intensity across all entries
pub fn average_intensity(entries: &[JournalEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries.iter().map(|e| e.intensity.value() as u32).sum();
    Some(total as f64 / entries.len() as f64)
}
