//! Consecutive-day logging streak

use crate::domain::entry::JournalEntry;
use chrono::{Duration, NaiveDate, TimeZone};

/// Current streak of `entries` as of `today`, with calendar days taken in `tz`
pub fn compute_streak<Tz: TimeZone>(entries: &[JournalEntry], today: NaiveDate, tz: &Tz) -> u32 {
    streak_from_days(entries.iter().map(|e| e.day_in(tz)), today)
}

/// Length of the run of consecutive days ending at `today` or the day before.
///
/// Days are walked newest first; duplicates of the current day are skipped and
/// the first gap ends the run. If the newest day is neither today nor
/// yesterday there is no streak.
pub fn streak_from_days<I>(days: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut days: Vec<NaiveDate> = days.into_iter().collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut iter = days.into_iter();
    let Some(newest) = iter.next() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if newest != today && newest != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = newest;

    for day in iter {
        if day == cursor {
            continue;
        }
        if day == cursor - Duration::days(1) {
            streak += 1;
            cursor = day;
        } else {
            break;
        }
    }

    streak
}
