//! Pomodoro session statistics.
//!
//! Rolls the full session list into lifetime totals plus a 7-day trailing
//! series anchored at "today". Days without sessions report zeros instead
//! of being dropped, so charts always get seven buckets.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::PomodoroSession;

/// One day's bucket in the trailing series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPomodoro {
    pub date: NaiveDate,
    pub sessions: u64,
    pub focus_min: u64,
    pub break_min: u64,
}

/// Aggregate view over all recorded sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PomodoroStats {
    pub total_sessions: u64,
    pub total_focus_min: u64,
    pub total_break_min: u64,
    /// Seven buckets, oldest first, ending at "today".
    pub last_seven_days: Vec<DailyPomodoro>,
}

/// Compute totals and the trailing series for the given anchor day.
pub fn stats(sessions: &[PomodoroSession], today: NaiveDate) -> PomodoroStats {
    let mut out = PomodoroStats::default();

    for s in sessions {
        out.total_sessions += 1;
        out.total_focus_min += u64::from(s.focus_min);
        out.total_break_min += u64::from(s.break_min);
    }

    for offset in (0..7).rev() {
        let date = today
            .checked_sub_days(Days::new(offset))
            .unwrap_or(today);
        let mut day = DailyPomodoro {
            date,
            sessions: 0,
            focus_min: 0,
            break_min: 0,
        };
        for s in sessions.iter().filter(|s| s.date == date) {
            day.sessions += 1;
            day.focus_min += u64::from(s.focus_min);
            day.break_min += u64::from(s.break_min);
        }
        out.last_seven_days.push(day);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: &str, day: NaiveDate, focus: u32, brk: u32) -> PomodoroSession {
        let started = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        PomodoroSession {
            id: id.into(),
            started_at: started,
            ended_at: started + chrono::Duration::minutes(i64::from(focus + brk)),
            focus_min: focus,
            break_min: brk,
            date: day,
            task_id: None,
        }
    }

    #[test]
    fn totals_sum_every_session() {
        let sessions = vec![
            session("pomodoro-1-a", date(2024, 5, 1), 25, 5),
            session("pomodoro-2-b", date(2024, 5, 3), 50, 10),
            session("pomodoro-3-c", date(2024, 5, 3), 15, 0),
        ];
        let stats = stats(&sessions, date(2024, 5, 7));
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_focus_min, 90);
        assert_eq!(stats.total_break_min, 15);
    }

    #[test]
    fn series_is_seven_days_oldest_first_with_zero_fill() {
        let sessions = vec![
            session("pomodoro-1-a", date(2024, 5, 3), 25, 5),
            session("pomodoro-2-b", date(2024, 5, 3), 25, 5),
            session("pomodoro-3-c", date(2024, 5, 7), 10, 2),
            // Outside the window; counted in totals only.
            session("pomodoro-4-d", date(2024, 4, 20), 99, 9),
        ];
        let stats = stats(&sessions, date(2024, 5, 7));

        assert_eq!(stats.last_seven_days.len(), 7);
        assert_eq!(stats.last_seven_days[0].date, date(2024, 5, 1));
        assert_eq!(stats.last_seven_days[6].date, date(2024, 5, 7));

        let day3 = &stats.last_seven_days[2];
        assert_eq!(day3.date, date(2024, 5, 3));
        assert_eq!(day3.sessions, 2);
        assert_eq!(day3.focus_min, 50);
        assert_eq!(day3.break_min, 10);

        // Explicit zeros for quiet days.
        let day4 = &stats.last_seven_days[3];
        assert_eq!(day4.sessions, 0);
        assert_eq!(day4.focus_min, 0);
        assert_eq!(day4.break_min, 0);

        assert_eq!(stats.total_focus_min, 159);
    }
}
