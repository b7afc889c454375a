//! Habit streak arithmetic.
//!
//! Two algorithms live here on purpose. The incremental rule is O(1) and
//! assumes toggles always target "today"; it maintains the streak stored on
//! the habit. The backward scan recomputes a consecutive-run length from
//! the full history and feeds the monthly heatmap. After a retroactive edit
//! the two can disagree; the stored streak stays with the incremental rule.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Streak after marking `today` complete.
///
/// Extends the streak when there is one to extend, or when yesterday is in
/// the history; otherwise the streak restarts at 1.
pub fn after_completing(
    previous: u32,
    completed_dates: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> u32 {
    let yesterday = today.checked_sub_days(Days::new(1));
    let extends = previous > 0 || yesterday.is_some_and(|d| completed_dates.contains(&d));
    if extends {
        previous + 1
    } else {
        1
    }
}

/// Streak after un-marking `today`, floored at zero.
pub fn after_uncompleting(previous: u32) -> u32 {
    previous.saturating_sub(1)
}

/// Length of the consecutive run of completed days ending at `date`.
///
/// Walks backward while each prior calendar day is in the history. Used by
/// the monthly heatmap; independent of the stored streak.
pub fn run_length_ending_at(completed_dates: &BTreeSet<NaiveDate>, date: NaiveDate) -> u32 {
    let mut len = 0;
    let mut cursor = date;
    while completed_dates.contains(&cursor) {
        len += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(days: &[(i32, u32, u32)]) -> BTreeSet<NaiveDate> {
        days.iter().map(|&(y, m, d)| date(y, m, d)).collect()
    }

    #[test]
    fn completing_after_yesterday_extends() {
        let history = dates(&[(2024, 5, 1)]);
        assert_eq!(after_completing(1, &history, date(2024, 5, 2)), 2);
    }

    #[test]
    fn completing_with_gap_but_live_streak_still_extends() {
        // The incremental rule trusts the stored streak even when yesterday
        // is absent from the history.
        let history = dates(&[(2024, 4, 20)]);
        assert_eq!(after_completing(3, &history, date(2024, 5, 2)), 4);
    }

    #[test]
    fn completing_cold_restarts_at_one() {
        let history = BTreeSet::new();
        assert_eq!(after_completing(0, &history, date(2024, 5, 2)), 1);
    }

    #[test]
    fn uncompleting_decrements_floored_at_zero() {
        assert_eq!(after_uncompleting(2), 1);
        assert_eq!(after_uncompleting(0), 0);
    }

    #[test]
    fn run_length_counts_consecutive_days() {
        let history = dates(&[(2024, 5, 1), (2024, 5, 2), (2024, 5, 3), (2024, 5, 5)]);
        assert_eq!(run_length_ending_at(&history, date(2024, 5, 3)), 3);
        assert_eq!(run_length_ending_at(&history, date(2024, 5, 5)), 1);
        assert_eq!(run_length_ending_at(&history, date(2024, 5, 4)), 0);
    }

    #[test]
    fn algorithms_disagree_after_retroactive_edit() {
        // Incremental rule saw two "today" toggles; the scan sees the gap.
        let history = dates(&[(2024, 5, 1), (2024, 5, 3)]);
        let incremental = after_completing(1, &history, date(2024, 5, 3));
        let scanned = run_length_ending_at(&history, date(2024, 5, 3));
        assert_eq!(incremental, 2);
        assert_eq!(scanned, 1);
    }
}
