//! Derived time-slot rules for assignments and exams.
//!
//! Creating an assignment or exam with a time value derives exactly one
//! slot tagged with `related_item_id`. Default durations: one hour for
//! assignments, two for exams, both capped so the slot never runs past the
//! end-of-day boundary.

use chrono::NaiveTime;

use crate::id::IdGenerator;
use crate::model::{Assignment, Exam, SlotKind, TimeSlot};

/// Latest allowed slot end. A derived slot is clipped here rather than
/// spilling into the next day.
pub const DAY_END: &str = "23:00";

/// Parse an `HH:mm` clock string.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Format a clock time back to `HH:mm`.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Compute `start + minutes`, clipped at [`DAY_END`].
///
/// Returns `None` when `start` is not a valid `HH:mm` string; a malformed
/// time behaves as if no time was provided, so no slot gets derived.
pub fn end_after(start: &str, minutes: u32) -> Option<String> {
    let start = parse_hhmm(start)?;
    let day_end = parse_hhmm(DAY_END).unwrap_or(NaiveTime::MIN);
    let end = start + chrono::Duration::minutes(i64::from(minutes));
    // NaiveTime arithmetic wraps at midnight; wrapping means we ran past
    // the cap as well.
    let end = if end < start || end > day_end { day_end } else { end };
    Some(format_hhmm(end))
}

/// Derive the single slot for a newly created assignment, if it has a
/// usable time.
pub fn assignment_slot(
    ids: &mut IdGenerator,
    assignment: &Assignment,
    duration_min: u32,
) -> Option<TimeSlot> {
    let start = assignment.time.as_deref()?;
    let end = end_after(start, duration_min)?;
    Some(TimeSlot {
        id: ids.next("slot"),
        title: assignment.title.clone(),
        date: assignment.due_date,
        start: start.to_string(),
        end,
        kind: SlotKind::Assignment,
        description: None,
        related_item_id: Some(assignment.id.clone()),
    })
}

/// Derive the single slot for a newly created exam, if it has a usable time.
pub fn exam_slot(ids: &mut IdGenerator, exam: &Exam, duration_min: u32) -> Option<TimeSlot> {
    let start = exam.time.as_deref()?;
    let end = end_after(start, duration_min)?;
    Some(TimeSlot {
        id: ids.next("slot"),
        title: exam.title.clone(),
        date: exam.date,
        start: start.to_string(),
        end,
        kind: SlotKind::Test,
        description: exam.location.clone(),
        related_item_id: Some(exam.id.clone()),
    })
}

/// Patch the linked slot of an exam whose date/time/title changed.
///
/// The slot is located by `related_item_id`; if none exists, none is
/// created retroactively.
pub fn repatch_exam_slot(slots: &mut [TimeSlot], exam: &Exam, duration_min: u32) {
    let Some(slot) = slots
        .iter_mut()
        .find(|s| s.related_item_id.as_deref() == Some(exam.id.as_str()))
    else {
        return;
    };
    slot.title = exam.title.clone();
    slot.date = exam.date;
    if let Some(start) = exam.time.as_deref() {
        if let Some(end) = end_after(start, duration_min) {
            slot.start = start.to_string();
            slot.end = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn essay(time: Option<&str>) -> Assignment {
        Assignment {
            id: "assignment-1-x".into(),
            title: "Essay".into(),
            course: "Eng101".into(),
            due_date: date(2024, 5, 1),
            status: Default::default(),
            time: time.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn end_after_adds_duration() {
        assert_eq!(end_after("14:00", 60).as_deref(), Some("15:00"));
        assert_eq!(end_after("09:30", 120).as_deref(), Some("11:30"));
    }

    #[test]
    fn end_after_caps_at_day_end() {
        assert_eq!(end_after("22:30", 60).as_deref(), Some("23:00"));
        assert_eq!(end_after("23:00", 120).as_deref(), Some("23:00"));
    }

    #[test]
    fn end_after_rejects_malformed_start() {
        assert_eq!(end_after("half past nine", 60), None);
    }

    #[test]
    fn assignment_slot_uses_one_hour_default() {
        let mut ids = IdGenerator::new();
        let slot = assignment_slot(&mut ids, &essay(Some("14:00")), 60).unwrap();
        assert_eq!(slot.start, "14:00");
        assert_eq!(slot.end, "15:00");
        assert_eq!(slot.kind, SlotKind::Assignment);
        assert_eq!(slot.related_item_id.as_deref(), Some("assignment-1-x"));
        assert_eq!(slot.date, date(2024, 5, 1));
    }

    #[test]
    fn assignment_without_time_derives_nothing() {
        let mut ids = IdGenerator::new();
        assert!(assignment_slot(&mut ids, &essay(None), 60).is_none());
        assert!(assignment_slot(&mut ids, &essay(Some("later")), 60).is_none());
    }

    #[test]
    fn repatch_updates_linked_slot_in_place() {
        let mut ids = IdGenerator::new();
        let mut exam = Exam {
            id: "exam-1-x".into(),
            title: "Midterm".into(),
            subject: "Math".into(),
            date: date(2024, 6, 10),
            time: Some("10:00".into()),
            location: None,
            description: None,
            created_at: Utc::now(),
        };
        let mut slots = vec![exam_slot(&mut ids, &exam, 120).unwrap()];
        assert_eq!(slots[0].end, "12:00");

        exam.date = date(2024, 6, 12);
        exam.time = Some("13:00".into());
        exam.title = "Midterm (moved)".into();
        repatch_exam_slot(&mut slots, &exam, 120);

        assert_eq!(slots[0].date, date(2024, 6, 12));
        assert_eq!(slots[0].start, "13:00");
        assert_eq!(slots[0].end, "15:00");
        assert_eq!(slots[0].title, "Midterm (moved)");
    }

    #[test]
    fn repatch_without_linked_slot_creates_none() {
        let exam = Exam {
            id: "exam-9-x".into(),
            title: "Final".into(),
            subject: "Math".into(),
            date: date(2024, 6, 20),
            time: Some("09:00".into()),
            location: None,
            description: None,
            created_at: Utc::now(),
        };
        let mut slots: Vec<TimeSlot> = Vec::new();
        repatch_exam_slot(&mut slots, &exam, 120);
        assert!(slots.is_empty());
    }
}
