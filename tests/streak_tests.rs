//! Integration tests for streak and stats commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{entry_json, init_utc, mindcaps_cmd, write_entries};

fn streak_for(dates: &[&str], today: &str) -> assert_cmd::assert::Assert {
    let temp = TempDir::new().unwrap();
    init_utc(temp.path());
    let entries: Vec<String> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| entry_json(i as i64 + 1, d, "Happy", 5, ""))
        .collect();
    write_entries(temp.path(), &entries);

    mindcaps_cmd()
        .current_dir(temp.path())
        .args(["streak", "--today", today])
        .assert()
}

#[test]
fn test_three_consecutive_days() {
    streak_for(
        &[
            "2024-01-10T09:00:00Z",
            "2024-01-09T21:00:00Z",
            "2024-01-08T07:30:00Z",
        ],
        "2024-01-10",
    )
    .success()
    .stdout("Streak: 3 days\n");
}

#[test]
fn test_gap_breaks_streak() {
    streak_for(&["2024-01-10T09:00:00Z", "2024-01-08T09:00:00Z"], "2024-01-10")
        .success()
        .stdout("Streak: 1 day\n");
}

#[test]
fn test_stale_entries_give_zero() {
    streak_for(&["2024-01-08T09:00:00Z"], "2024-01-10")
        .success()
        .stdout("Streak: 0 days\n");
}

#[test]
fn test_same_day_counted_once() {
    streak_for(&["2024-01-10T09:00:00Z", "2024-01-10T18:00:00Z"], "2024-01-10")
        .success()
        .stdout("Streak: 1 day\n");
}

#[test]
fn test_empty_journal_gives_zero() {
    streak_for(&[], "2024-01-10")
        .success()
        .stdout("Streak: 0 days\n");
}

#[test]
fn test_invalid_today_rejected() {
    streak_for(&[], "10-01-2024")
        .code(5)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_stats_summary() {
    let temp = TempDir::new().unwrap();
    init_utc(temp.path());
    write_entries(
        temp.path(),
        &[
            entry_json(3, "2024-01-10T09:00:00Z", "Calm", 4, "calm"),
            entry_json(2, "2024-01-09T09:00:00Z", "Happy", 8, "great"),
            entry_json(1, "2024-01-09T20:00:00Z", "Happy", 6, ""),
        ],
    );

    mindcaps_cmd()
        .current_dir(temp.path())
        .args(["sleep", "log", "7.5", "--quality", "great"])
        .assert()
        .success();

    mindcaps_cmd()
        .current_dir(temp.path())
        .args(["stats", "--today", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak: 2 days"))
        .stdout(predicate::str::contains("Entries: 3 (average intensity 6.0)"))
        .stdout(predicate::str::contains("  Happy     2"))
        .stdout(predicate::str::contains("  Calm      1"))
        .stdout(predicate::str::contains("  Tue 2"))
        .stdout(predicate::str::contains("  Wed 1"))
        .stdout(predicate::str::contains("7.5h"));
}
