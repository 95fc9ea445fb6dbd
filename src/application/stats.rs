//! Streak, dashboard and analytics use cases

use crate::domain::greeting::{greeting_for_hour, quote_for_date};
use crate::domain::stats::{
    average_intensity, intensity_history, mood_distribution, sentiment_breakdown, sleep_trend,
    weekly_activity,
};
use crate::domain::{compute_streak, JournalEntry, Mood, Sentiment, SleepLog};
use crate::error::Result;
use crate::infrastructure::{DayBoundary, FileSystemRepository, JournalRepository};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike, Utc};
use tracing::debug;

/// Entries shown on the dashboard
pub const DASHBOARD_RECENT: usize = 3;

/// Everything the analytics view displays
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub today: NaiveDate,
    pub streak: u32,
    pub total_entries: usize,
    pub average_intensity: Option<f64>,
    pub moods: Vec<(Mood, usize)>,
    pub sentiments: Vec<(Sentiment, usize)>,
    pub intensity_history: Vec<(NaiveDate, u8)>,
    pub sleep_trend: Vec<(NaiveDate, f64)>,
    /// Entries per weekday, Monday first
    pub weekly: [usize; 7],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub greeting: &'static str,
    pub quote: &'static str,
    pub streak: u32,
    pub recent: Vec<JournalEntry>,
}

/// Service computing derived statistics from stored data
pub struct StatsService {
    repository: FileSystemRepository,
}

impl StatsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StatsService { repository }
    }

    /// Current streak; `today` defaults to the configured calendar's date
    pub fn streak(&self, today: Option<NaiveDate>) -> Result<u32> {
        let boundary = self.repository.load_config()?.timezone;
        let today = today.unwrap_or_else(|| boundary.today());
        let entries = self.repository.load_entries()?;

        let streak = match boundary {
            DayBoundary::Local => compute_streak(&entries, today, &Local),
            DayBoundary::Utc => compute_streak(&entries, today, &Utc),
        };
        debug!(%today, streak, entries = entries.len(), "computed streak");
        Ok(streak)
    }

    pub fn summary(&self, today: Option<NaiveDate>) -> Result<StatsSummary> {
        let boundary = self.repository.load_config()?.timezone;
        let today = today.unwrap_or_else(|| boundary.today());
        let entries = self.repository.load_entries()?;
        let sleep = self.repository.load_sleep_logs()?;

        Ok(match boundary {
            DayBoundary::Local => summarize(&entries, &sleep, today, &Local),
            DayBoundary::Utc => summarize(&entries, &sleep, today, &Utc),
        })
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        self.dashboard_at(Utc::now())
    }

    /// Dashboard as of `now`. The greeting follows the local wall clock
    /// whatever the configured day boundary.
    pub fn dashboard_at(&self, now: DateTime<Utc>) -> Result<Dashboard> {
        let boundary = self.repository.load_config()?.timezone;
        let hour = now.with_timezone(&Local).hour();
        let today = boundary.date_of(now);

        let streak = self.streak(Some(today))?;
        let mut recent = self.repository.load_entries()?;
        recent.truncate(DASHBOARD_RECENT);

        Ok(Dashboard {
            today,
            greeting: greeting_for_hour(hour),
            quote: quote_for_date(today),
            streak,
            recent,
        })
    }
}

fn summarize<Tz: TimeZone>(
    entries: &[JournalEntry],
    sleep: &[SleepLog],
    today: NaiveDate,
    tz: &Tz,
) -> StatsSummary {
    StatsSummary {
        today,
        streak: compute_streak(entries, today, tz),
        total_entries: entries.len(),
        average_intensity: average_intensity(entries),
        moods: mood_distribution(entries),
        sentiments: sentiment_breakdown(entries),
        intensity_history: intensity_history(entries, tz),
        sleep_trend: sleep_trend(sleep, tz),
        weekly: weekly_activity(entries, today, tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Intensity, SleepQuality};
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn utc_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(DayBoundary::Utc)).unwrap();
        (temp, repo)
    }

    fn seed(repo: &FileSystemRepository, stamps: &[&str]) {
        let entries: Vec<JournalEntry> = stamps
            .iter()
            .map(|s| {
                JournalEntry::new(Mood::Happy, Intensity::default(), "good", at(s), None).unwrap()
            })
            .collect();
        repo.save_entries(&entries).unwrap();
    }

    #[test]
    fn test_streak_with_injected_today() {
        let (_temp, repo) = utc_repo();
        seed(
            &repo,
            &[
                "2024-01-10T09:00:00Z",
                "2024-01-09T09:00:00Z",
                "2024-01-08T09:00:00Z",
            ],
        );
        let service = StatsService::new(repo);

        assert_eq!(service.streak(Some(day(10))).unwrap(), 3);
        assert_eq!(service.streak(Some(day(11))).unwrap(), 3);
        assert_eq!(service.streak(Some(day(12))).unwrap(), 0);
    }

    #[test]
    fn test_streak_empty_journal() {
        let (_temp, repo) = utc_repo();
        let service = StatsService::new(repo);
        assert_eq!(service.streak(Some(day(10))).unwrap(), 0);
    }

    #[test]
    fn test_summary_collects_everything() {
        let (_temp, repo) = utc_repo();
        seed(&repo, &["2024-01-10T09:00:00Z", "2024-01-09T09:00:00Z"]);
        let log = SleepLog::new(7.0, SleepQuality::Good, at("2024-01-10T06:00:00Z"), None).unwrap();
        repo.save_sleep_logs(&[log]).unwrap();

        let summary = StatsService::new(repo).summary(Some(day(10))).unwrap();
        assert_eq!(summary.streak, 2);
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.average_intensity, Some(5.0));
        assert_eq!(summary.moods[0], (Mood::Happy, 2));
        assert_eq!(summary.sentiments[0], (Sentiment::Positive, 2));
        assert_eq!(summary.intensity_history, vec![(day(9), 5), (day(10), 5)]);
        assert_eq!(summary.sleep_trend, vec![(day(10), 7.0)]);
        // Tuesday and Wednesday
        assert_eq!(summary.weekly, [0, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_dashboard_shows_three_most_recent() {
        let (_temp, repo) = utc_repo();
        seed(
            &repo,
            &[
                "2024-01-10T09:00:00Z",
                "2024-01-09T09:00:00Z",
                "2024-01-08T09:00:00Z",
                "2024-01-07T09:00:00Z",
            ],
        );

        let dashboard = StatsService::new(repo).dashboard().unwrap();
        assert_eq!(dashboard.recent.len(), DASHBOARD_RECENT);
        assert_eq!(dashboard.recent[0].date, at("2024-01-10T09:00:00Z"));
        assert!(!dashboard.quote.is_empty());
        assert!(dashboard.greeting.starts_with("Good"));
    }

    #[test]
    fn test_dashboard_greets_by_local_hour_under_utc_boundary() {
        let (_temp, repo) = utc_repo();
        seed(&repo, &["2024-01-10T09:00:00Z", "2024-01-09T09:00:00Z"]);
        let now = at("2024-01-10T23:30:00Z");

        let dashboard = StatsService::new(repo).dashboard_at(now).unwrap();
        assert_eq!(dashboard.today, day(10));
        assert_eq!(dashboard.streak, 2);
        assert_eq!(
            dashboard.greeting,
            greeting_for_hour(now.with_timezone(&Local).hour())
        );
        assert_eq!(dashboard.quote, quote_for_date(day(10)));
    }
}
