//! Output formatting utilities

use crate::application::{Dashboard, StatsSummary};
use crate::domain::{GratitudeItem, JournalEntry, SleepLog};
use crate::infrastructure::DayBoundary;
use chrono::{DateTime, Local, Utc};

const NOTE_PREVIEW_CHARS: usize = 30;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn timestamp(date: DateTime<Utc>, boundary: DayBoundary) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M";
    match boundary {
        DayBoundary::Local => date.with_timezone(&Local).format(FORMAT).to_string(),
        DayBoundary::Utc => date.format(FORMAT).to_string(),
    }
}

fn format_entry(entry: &JournalEntry, boundary: DayBoundary) -> String {
    let note = if entry.note.is_empty() {
        String::new()
    } else {
        format!(" - {}", entry.note_preview(NOTE_PREVIEW_CHARS))
    };
    format!(
        "{}  {} {} ({}/10){}  [{}]\n",
        timestamp(entry.date, boundary),
        entry.mood.emoji(),
        entry.mood,
        entry.intensity.value(),
        note,
        entry.sentiment
    )
}

/// Format a list of journal entries for display
pub fn format_entry_list(entries: &[JournalEntry], boundary: DayBoundary) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries.iter().map(|e| format_entry(e, boundary)).collect()
}

pub fn format_gratitude_list(items: &[GratitudeItem], boundary: DayBoundary) -> String {
    if items.is_empty() {
        return "No gratitude items yet".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "{}  {}  (id {})\n",
            timestamp(item.date, boundary),
            item.text,
            item.id
        ));
    }
    output
}

pub fn format_sleep_list(logs: &[SleepLog], boundary: DayBoundary) -> String {
    if logs.is_empty() {
        return "No sleep logged yet".to_string();
    }

    let mut output = String::new();
    for log in logs {
        output.push_str(&format!(
            "{}  {:.1}h  {}\n",
            timestamp(log.date, boundary),
            log.hours,
            log.quality
        ));
    }
    output
}

pub fn format_streak(streak: u32) -> String {
    match streak {
        1 => "Streak: 1 day".to_string(),
        n => format!("Streak: {} days", n),
    }
}

pub fn format_dashboard(dashboard: &Dashboard, boundary: DayBoundary) -> String {
    let mut output = format!(
        "{}\n{}\n\"{}\"\n\n{}\n\nRecent entries\n",
        dashboard.today.format("%A, %B %-d"),
        dashboard.greeting,
        dashboard.quote,
        format_streak(dashboard.streak)
    );
    output.push_str(&format_entry_list(&dashboard.recent, boundary));
    output
}

pub fn format_stats(summary: &StatsSummary) -> String {
    let mut output = String::new();

    output.push_str(&format_streak(summary.streak));
    output.push('\n');
    match summary.average_intensity {
        Some(avg) => output.push_str(&format!(
            "Entries: {} (average intensity {:.1})\n",
            summary.total_entries, avg
        )),
        None => output.push_str("Entries: 0\n"),
    }

    output.push_str("\nMood distribution\n");
    for (mood, count) in &summary.moods {
        output.push_str(&format!("  {:<9} {}\n", mood.label(), count));
    }

    output.push_str("\nSentiment\n");
    for (sentiment, count) in &summary.sentiments {
        output.push_str(&format!("  {:<9} {}\n", sentiment.as_str(), count));
    }

    output.push_str("\nThis week\n");
    for (label, count) in WEEKDAYS.iter().zip(summary.weekly.iter()) {
        output.push_str(&format!("  {} {}\n", label, count));
    }

    if !summary.intensity_history.is_empty() {
        output.push_str("\nIntensity history\n");
        for (day, intensity) in &summary.intensity_history {
            output.push_str(&format!("  {}  {}\n", day.format("%Y-%m-%d"), intensity));
        }
    }

    if !summary.sleep_trend.is_empty() {
        output.push_str("\nSleep\n");
        for (day, hours) in &summary.sleep_trend {
            output.push_str(&format!("  {}  {:.1}h\n", day.format("%Y-%m-%d"), hours));
        }
    }

    output
}
