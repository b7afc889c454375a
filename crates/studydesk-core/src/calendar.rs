//! Unified calendar projection.
//!
//! A pure, lazy view over the current snapshot: nothing is cached, calling
//! the function again restarts the sequence. Ordering across entity types
//! is unspecified; callers filter by exact date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Assignment, Exam, Habit, JournalEntry, StudyTask, Task};

/// Discriminator for where a calendar event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Assignment,
    Habit,
    Goal,
    Journal,
    Test,
    Study,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Assignment => "assignment",
            Self::Habit => "habit",
            Self::Goal => "goal",
            Self::Journal => "journal",
            Self::Test => "test",
            Self::Study => "study",
        }
    }
}

/// One dated event on the unified calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub title: String,
    /// Id of the entity that emitted this event.
    pub source_id: String,
    pub time: Option<String>, // HH:mm
}

/// Project the snapshot into a lazy event sequence.
///
/// - tasks emit only when they have a due date
/// - a goal emits once per target date and once per completed date, so it
///   is visible both on its deadline and on every day progress was logged
/// - a plain habit emits once per completed date
pub fn events<'a>(
    tasks: &'a [Task],
    assignments: &'a [Assignment],
    habits: &'a [Habit],
    journal: &'a [JournalEntry],
    exams: &'a [Exam],
    study_tasks: &'a [StudyTask],
) -> impl Iterator<Item = CalendarEvent> + 'a {
    let tasks = tasks.iter().filter_map(|t| {
        t.due_date.map(|date| CalendarEvent {
            kind: EventKind::Task,
            date,
            title: t.title.clone(),
            source_id: t.id.clone(),
            time: t.time.clone(),
        })
    });

    let assignments = assignments.iter().map(|a| CalendarEvent {
        kind: EventKind::Assignment,
        date: a.due_date,
        title: a.title.clone(),
        source_id: a.id.clone(),
        time: a.time.clone(),
    });

    let habits = habits.iter().flat_map(|h| {
        let kind = if h.is_goal { EventKind::Goal } else { EventKind::Habit };
        let target = h
            .is_goal
            .then_some(h.target_date)
            .flatten()
            .map(|date| CalendarEvent {
                kind,
                date,
                title: h.title.clone(),
                source_id: h.id.clone(),
                time: None,
            });
        let logged = h.completed_dates.iter().map(move |&date| CalendarEvent {
            kind,
            date,
            title: h.title.clone(),
            source_id: h.id.clone(),
            time: None,
        });
        target.into_iter().chain(logged)
    });

    let journal = journal.iter().map(|j| CalendarEvent {
        kind: EventKind::Journal,
        date: j.date,
        title: j.title.clone(),
        source_id: j.id.clone(),
        time: None,
    });

    let exams = exams.iter().map(|e| CalendarEvent {
        kind: EventKind::Test,
        date: e.date,
        title: e.title.clone(),
        source_id: e.id.clone(),
        time: e.time.clone(),
    });

    let study = study_tasks.iter().map(|s| CalendarEvent {
        kind: EventKind::Study,
        date: s.date,
        title: s.title.clone(),
        source_id: s.id.clone(),
        time: s.time.clone(),
    });

    tasks
        .chain(assignments)
        .chain(habits)
        .chain(journal)
        .chain(exams)
        .chain(study)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, due: Option<NaiveDate>) -> Task {
        Task {
            id: id.into(),
            title: "t".into(),
            completed: false,
            due_date: due,
            time: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn task_emits_only_with_due_date() {
        let tasks = vec![task("task-1-a", Some(date(2024, 5, 1))), task("task-2-b", None)];
        let events: Vec<_> = events(&tasks, &[], &[], &[], &[], &[]).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Task);
        assert_eq!(events[0].source_id, "task-1-a");
    }

    #[test]
    fn goal_emits_target_and_every_logged_day() {
        let mut completed = BTreeSet::new();
        completed.insert(date(2024, 5, 1));
        completed.insert(date(2024, 5, 2));
        let goal = Habit {
            id: "habit-1-g".into(),
            title: "Thesis".into(),
            streak: 0,
            completed_dates: completed,
            is_goal: true,
            progress: 40,
            target_date: Some(date(2024, 6, 1)),
            created_at: Utc::now(),
        };
        let events: Vec<_> = events(&[], &[], &[goal], &[], &[], &[]).collect();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.kind == EventKind::Goal));
        assert!(events.iter().any(|e| e.date == date(2024, 6, 1)));
    }

    #[test]
    fn plain_habit_emits_per_completed_day_without_target() {
        let mut completed = BTreeSet::new();
        completed.insert(date(2024, 5, 1));
        let habit = Habit {
            id: "habit-2-h".into(),
            title: "Run".into(),
            streak: 1,
            completed_dates: completed,
            is_goal: false,
            progress: 0,
            target_date: Some(date(2024, 6, 1)), // ignored for non-goals
            created_at: Utc::now(),
        };
        let events: Vec<_> = events(&[], &[], &[habit], &[], &[], &[]).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Habit);
        assert_eq!(events[0].date, date(2024, 5, 1));
    }

    #[test]
    fn projection_is_restartable() {
        let tasks = vec![task("task-1-a", Some(date(2024, 5, 1)))];
        let first: Vec<_> = events(&tasks, &[], &[], &[], &[], &[]).collect();
        let second: Vec<_> = events(&tasks, &[], &[], &[], &[], &[]).collect();
        assert_eq!(first.len(), second.len());
    }
}
