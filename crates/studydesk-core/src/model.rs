//! Entity types for the student dashboard state engine.
//!
//! Every collection the session owns is made of these types. They carry no
//! behavior beyond construction defaults; mutation happens through the named
//! session operations so that gamification and slot-derivation rules always
//! run alongside the field change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Completion status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Parse from the wire/CLI form, defaulting to `NotStarted`.
    pub fn parse(s: &str) -> Self {
        match s {
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::NotStarted,
        }
    }
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        AssignmentStatus::NotStarted
    }
}

/// What a time slot on the calendar represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Derived from an assignment's due time.
    Assignment,
    /// Derived from an exam's scheduled time.
    Test,
    /// A study block.
    Study,
    /// Anything the user typed in themselves.
    Custom,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Test => "test",
            Self::Study => "study",
            Self::Custom => "custom",
        }
    }
}

/// Theme preference; `System` defers to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::System
    }
}

/// A standalone to-do item. No children, no derived records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub time: Option<String>, // HH:mm
    pub created_at: DateTime<Utc>,
}

/// Coursework with a deadline. Creating one with a time derives exactly one
/// owned-by-reference [`TimeSlot`]; deleting it cascades to those slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub time: Option<String>, // HH:mm, provenance of the derived slot
    pub created_at: DateTime<Utc>,
}

/// A scheduled exam. Same slot derivation/cascade as [`Assignment`], with a
/// two-hour default duration. The calendar discriminates it as `"test"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
    pub time: Option<String>, // HH:mm
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A scheduled calendar block, user-authored or derived.
///
/// `related_item_id` is a weak back-reference to the assignment/exam the
/// slot was derived from; it is a lookup key for update/cascade propagation,
/// never an ownership edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start: String, // HH:mm
    pub end: String,   // HH:mm
    pub kind: SlotKind,
    pub description: Option<String>,
    pub related_item_id: Option<String>,
}

/// A habit, or (when `is_goal`) a goal with percentage progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    /// Consecutive-day completion streak ending at the most recent
    /// completed day. Maintained incrementally by the toggle operation.
    pub streak: u32,
    /// Days the habit was marked complete. Ordered and duplicate-free;
    /// ISO `YYYY-MM-DD` strings on the wire.
    pub completed_dates: BTreeSet<NaiveDate>,
    pub is_goal: bool,
    /// 0-100, only meaningful when `is_goal`.
    pub progress: u8,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A recorded grade. No derived records, no gamification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub title: String,
    pub course: String,
    pub score: f64,
    pub max_score: f64,
    pub date: NaiveDate,
}

/// One completed pomodoro run. Sessions are append-only: there is no
/// un-complete operation and no XP reversal for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub focus_min: u32,
    pub break_min: u32,
    pub date: NaiveDate,
    pub task_id: Option<String>,
}

/// A dated journal entry, surfaced on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A reading-list item; completion toggles XP like a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingItem {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub completed: bool,
}

/// A wishlist item; purchasing toggles a larger XP award.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub purchased: bool,
}

/// A planned study block, kept separate from ordinary tasks. Creation
/// carries a small one-way XP award.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyTask {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>, // HH:mm
    pub duration_min: Option<u32>,
}

// === Input structures ===
//
// Add operations take these and assign a fresh id; update operations take
// the patch structs below, where a `None` field means "leave unchanged".

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub time: Option<String>, // HH:mm
}

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub time: Option<String>, // HH:mm
}

#[derive(Debug, Clone)]
pub struct NewExam {
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
    pub time: Option<String>, // HH:mm
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSlot {
    pub title: String,
    pub date: NaiveDate,
    pub start: String, // HH:mm
    pub end: String,   // HH:mm
    pub kind: SlotKind,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub title: String,
    pub course: String,
    pub score: f64,
    pub max_score: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewStudyTask {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>, // HH:mm
    pub duration_min: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub time: Option<String>,
}

/// Exam updates of date/time/title also repatch the linked slot, so they go
/// through a dedicated session operation rather than direct field writes.
#[derive(Debug, Clone, Default)]
pub struct ExamPatch {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SlotPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub title: Option<String>,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct GradePatch {
    pub title: Option<String>,
    pub course: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct JournalPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn assignment_status_roundtrip() {
        for status in [
            AssignmentStatus::NotStarted,
            AssignmentStatus::InProgress,
            AssignmentStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(AssignmentStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn slot_kind_uses_lowercase_wire_values() {
        let json = serde_json::to_string(&SlotKind::Test).unwrap();
        assert_eq!(json, "\"test\"");
        let kind: SlotKind = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(kind, SlotKind::Custom);
    }

    #[test]
    fn habit_dates_serialize_as_iso_strings() {
        let mut habit = Habit {
            id: "habit-1-x".into(),
            title: "Read".into(),
            streak: 2,
            completed_dates: BTreeSet::new(),
            is_goal: false,
            progress: 0,
            target_date: None,
            created_at: Utc::now(),
        };
        habit
            .completed_dates
            .insert(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        habit
            .completed_dates
            .insert(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(
            json["completed_dates"],
            serde_json::json!(["2024-05-01", "2024-05-02"])
        );
    }
}
