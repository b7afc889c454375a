//! The per-user entity store and its public operations.
//!
//! A [`Session`] owns every collection for the active user plus the scalar
//! state (XP, theme). All mutation goes through named operations so the
//! cross-entity rules always run: slot derivation and cascade on
//! assignments/exams, XP awards and reversals on completion transitions,
//! streak arithmetic on habit toggles. Every operation ends with an
//! explicit commit of the touched groups; a failed write is logged and
//! never surfaced, since persistence is a fire-and-forget side effect.
//!
//! Operations referencing an unknown id return `None`/`false` and change
//! nothing. The engine does not validate input values; that stays at the
//! UI boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, CalendarEvent};
use crate::gamification::{pomodoro_xp, XpState, COMPLETION_XP, STUDY_TASK_XP, WISHLIST_XP};
use crate::id::IdGenerator;
use crate::model::{
    Assignment, AssignmentStatus, Exam, ExamPatch, Grade, GradePatch, Habit, HabitPatch,
    JournalEntry, JournalPatch, NewAssignment, NewExam, NewGrade, NewJournalEntry, NewSlot,
    NewStudyTask, NewTask, PomodoroSession, ReadingItem, SlotPatch, StudyTask, Task, TaskPatch,
    ThemeMode, TimeSlot, WishlistItem,
};
use crate::pomodoro::{self, PomodoroStats};
use crate::slots;
use crate::storage::{Config, Group, StateDb};
use crate::streak;

/// Scalar per-user settings, persisted as their own group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    theme: ThemeMode,
}

/// Everything the active user owns, replaced wholesale on user switch.
#[derive(Debug, Default)]
struct Snapshot {
    tasks: Vec<Task>,
    assignments: Vec<Assignment>,
    exams: Vec<Exam>,
    slots: Vec<TimeSlot>,
    habits: Vec<Habit>,
    grades: Vec<Grade>,
    pomodoro_sessions: Vec<PomodoroSession>,
    journal: Vec<JournalEntry>,
    reading: Vec<ReadingItem>,
    wishlist: Vec<WishlistItem>,
    study_tasks: Vec<StudyTask>,
    stats: XpState,
    theme: ThemeMode,
}

/// The state engine handle collaborators operate through.
pub struct Session {
    db: StateDb,
    config: Config,
    ids: IdGenerator,
    user_id: Option<String>,
    state: Snapshot,
}

impl Session {
    /// Open the on-disk state database and configuration.
    ///
    /// The session starts with no active user; call
    /// [`switch_user`](Self::switch_user) to hydrate one.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let db = StateDb::open()?;
        Ok(Self::new(db, Config::load_or_default()))
    }

    /// Build a session over an already-open database.
    pub fn new(db: StateDb, config: Config) -> Self {
        Self {
            db,
            config,
            ids: IdGenerator::new(),
            user_id: None,
            state: Snapshot::default(),
        }
    }

    /// Hydrate every collection for `user_id` and swap the snapshot in.
    ///
    /// The new snapshot is fully loaded before the old one is replaced, so
    /// readers never observe a mix of two users' collections.
    pub fn switch_user(&mut self, user_id: &str) {
        let snapshot = self.load_snapshot(user_id);
        self.state = snapshot;
        self.user_id = Some(user_id.to_string());
        tracing::info!(user_id, "session hydrated");
    }

    /// Log out: reset every collection to its default. Stored data is kept.
    pub fn clear(&mut self) {
        self.user_id = None;
        self.state = Snapshot::default();
    }

    pub fn active_user(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    fn load_snapshot(&self, user_id: &str) -> Snapshot {
        let settings: Settings = match self.db.kv_get(user_id, Group::Settings) {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or(Settings {
                theme: self.config.ui.default_theme,
            }),
            _ => Settings {
                theme: self.config.ui.default_theme,
            },
        };
        Snapshot {
            tasks: self.db.load_group(user_id, Group::Tasks),
            assignments: self.db.load_group(user_id, Group::Assignments),
            exams: self.db.load_group(user_id, Group::Exams),
            slots: self.db.load_group(user_id, Group::TimeSlots),
            habits: self.db.load_group(user_id, Group::Habits),
            grades: self.db.load_group(user_id, Group::Grades),
            pomodoro_sessions: self.db.load_group(user_id, Group::Pomodoro),
            journal: self.db.load_group(user_id, Group::Journal),
            reading: self.db.load_group(user_id, Group::Reading),
            wishlist: self.db.load_group(user_id, Group::Wishlist),
            study_tasks: self.db.load_group(user_id, Group::StudyTasks),
            stats: self.db.load_group(user_id, Group::Stats),
            theme: settings.theme,
        }
    }

    /// Commit the current value of each touched group.
    fn persist(&self, groups: &[Group]) {
        let Some(user) = self.user_id.as_deref() else {
            return;
        };
        for &group in groups {
            let result = match group {
                Group::Tasks => self.db.save_group(user, group, &self.state.tasks),
                Group::Assignments => self.db.save_group(user, group, &self.state.assignments),
                Group::Exams => self.db.save_group(user, group, &self.state.exams),
                Group::TimeSlots => self.db.save_group(user, group, &self.state.slots),
                Group::Habits => self.db.save_group(user, group, &self.state.habits),
                Group::Grades => self.db.save_group(user, group, &self.state.grades),
                Group::Pomodoro => {
                    self.db
                        .save_group(user, group, &self.state.pomodoro_sessions)
                }
                Group::Journal => self.db.save_group(user, group, &self.state.journal),
                Group::Reading => self.db.save_group(user, group, &self.state.reading),
                Group::Wishlist => self.db.save_group(user, group, &self.state.wishlist),
                Group::StudyTasks => self.db.save_group(user, group, &self.state.study_tasks),
                Group::Stats => self.db.save_group(user, group, &self.state.stats),
                Group::Settings => self.db.save_group(
                    user,
                    group,
                    &Settings {
                        theme: self.state.theme,
                    },
                ),
            };
            if let Err(e) = result {
                tracing::warn!(user, group = group.as_str(), error = %e, "persist failed");
            }
        }
    }

    // === Read access ===

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }
    pub fn assignments(&self) -> &[Assignment] {
        &self.state.assignments
    }
    pub fn exams(&self) -> &[Exam] {
        &self.state.exams
    }
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.state.slots
    }
    pub fn habits(&self) -> &[Habit] {
        &self.state.habits
    }
    pub fn grades(&self) -> &[Grade] {
        &self.state.grades
    }
    pub fn pomodoro_sessions(&self) -> &[PomodoroSession] {
        &self.state.pomodoro_sessions
    }
    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.state.journal
    }
    pub fn reading_list(&self) -> &[ReadingItem] {
        &self.state.reading
    }
    pub fn wishlist(&self) -> &[WishlistItem] {
        &self.state.wishlist
    }
    pub fn study_tasks(&self) -> &[StudyTask] {
        &self.state.study_tasks
    }
    pub fn theme(&self) -> ThemeMode {
        self.state.theme
    }
    pub fn xp(&self) -> i64 {
        self.state.stats.xp
    }
    pub fn level(&self) -> i64 {
        self.state.stats.level()
    }

    // === Aggregate views ===

    /// Lazy calendar projection over the current snapshot; call again to
    /// restart the sequence.
    pub fn calendar_events(&self) -> impl Iterator<Item = CalendarEvent> + '_ {
        calendar::events(
            &self.state.tasks,
            &self.state.assignments,
            &self.state.habits,
            &self.state.journal,
            &self.state.exams,
            &self.state.study_tasks,
        )
    }

    /// Totals plus the 7-day trailing series anchored at `today`.
    pub fn pomodoro_stats(&self, today: NaiveDate) -> PomodoroStats {
        pomodoro::stats(&self.state.pomodoro_sessions, today)
    }

    /// Consecutive-run length ending at `date` for one habit's history.
    /// Feeds the monthly heatmap; independent of the stored streak.
    pub fn habit_run_length(&self, id: &str, date: NaiveDate) -> u32 {
        self.state
            .habits
            .iter()
            .find(|h| h.id == id)
            .map(|h| streak::run_length_ending_at(&h.completed_dates, date))
            .unwrap_or(0)
    }

    // === Gamification ===

    /// Apply an ad hoc XP delta and return the new total.
    pub fn add_xp(&mut self, delta: i64) -> i64 {
        let total = self.state.stats.apply(delta);
        self.persist(&[Group::Stats]);
        total
    }

    /// Consume the level-up flag, returning whether a level was just gained.
    pub fn take_level_up(&mut self) -> bool {
        let fired = self.state.stats.take_level_up();
        if fired {
            self.persist(&[Group::Stats]);
        }
        fired
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.state.theme = theme;
        self.persist(&[Group::Settings]);
    }

    // === Tasks ===

    pub fn add_task(&mut self, new: NewTask) -> &Task {
        let task = Task {
            id: self.ids.next("task"),
            title: new.title,
            completed: false,
            due_date: new.due_date,
            time: new.time,
            created_at: Utc::now(),
        };
        self.state.tasks.push(task);
        self.persist(&[Group::Tasks]);
        &self.state.tasks[self.state.tasks.len() - 1]
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Option<&Task> {
        let pos = self.state.tasks.iter().position(|t| t.id == id)?;
        {
            let task = &mut self.state.tasks[pos];
            if let Some(title) = patch.title {
                task.title = title;
            }
            if let Some(due_date) = patch.due_date {
                task.due_date = Some(due_date);
            }
            if let Some(time) = patch.time {
                task.time = Some(time);
            }
        }
        self.persist(&[Group::Tasks]);
        Some(&self.state.tasks[pos])
    }

    /// Flip completion, awarding or reverting the fixed delta.
    pub fn toggle_task(&mut self, id: &str) -> Option<&Task> {
        let pos = self.state.tasks.iter().position(|t| t.id == id)?;
        {
            let task = &mut self.state.tasks[pos];
            task.completed = !task.completed;
            let delta = if task.completed {
                COMPLETION_XP
            } else {
                -COMPLETION_XP
            };
            self.state.stats.apply(delta);
        }
        self.persist(&[Group::Tasks, Group::Stats]);
        Some(&self.state.tasks[pos])
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != id);
        if self.state.tasks.len() == before {
            return false;
        }
        self.persist(&[Group::Tasks]);
        true
    }

    // === Assignments ===

    /// Create an assignment; a time value derives exactly one linked slot.
    pub fn add_assignment(&mut self, new: NewAssignment) -> &Assignment {
        let assignment = Assignment {
            id: self.ids.next("assignment"),
            title: new.title,
            course: new.course,
            due_date: new.due_date,
            status: AssignmentStatus::NotStarted,
            time: new.time,
            created_at: Utc::now(),
        };
        if let Some(slot) = slots::assignment_slot(
            &mut self.ids,
            &assignment,
            self.config.slots.assignment_minutes,
        ) {
            self.state.slots.push(slot);
        }
        self.state.assignments.push(assignment);
        self.persist(&[Group::Assignments, Group::TimeSlots]);
        &self.state.assignments[self.state.assignments.len() - 1]
    }

    /// Status is the only mutable assignment field; crossing into or out of
    /// `completed` moves XP by the fixed delta.
    pub fn set_assignment_status(
        &mut self,
        id: &str,
        status: AssignmentStatus,
    ) -> Option<&Assignment> {
        let pos = self.state.assignments.iter().position(|a| a.id == id)?;
        {
            let assignment = &mut self.state.assignments[pos];
            let was_completed = assignment.status == AssignmentStatus::Completed;
            assignment.status = status;
            let now_completed = assignment.status == AssignmentStatus::Completed;
            if !was_completed && now_completed {
                self.state.stats.apply(COMPLETION_XP);
            } else if was_completed && !now_completed {
                self.state.stats.apply(-COMPLETION_XP);
            }
        }
        self.persist(&[Group::Assignments, Group::Stats]);
        Some(&self.state.assignments[pos])
    }

    /// Delete an assignment and cascade to every slot referencing it.
    pub fn delete_assignment(&mut self, id: &str) -> bool {
        let before = self.state.assignments.len();
        self.state.assignments.retain(|a| a.id != id);
        if self.state.assignments.len() == before {
            return false;
        }
        self.state
            .slots
            .retain(|s| s.related_item_id.as_deref() != Some(id));
        self.persist(&[Group::Assignments, Group::TimeSlots]);
        true
    }

    // === Exams ===

    pub fn add_exam(&mut self, new: NewExam) -> &Exam {
        let exam = Exam {
            id: self.ids.next("exam"),
            title: new.title,
            subject: new.subject,
            date: new.date,
            time: new.time,
            location: new.location,
            description: new.description,
            created_at: Utc::now(),
        };
        if let Some(slot) =
            slots::exam_slot(&mut self.ids, &exam, self.config.slots.exam_minutes)
        {
            self.state.slots.push(slot);
        }
        self.state.exams.push(exam);
        self.persist(&[Group::Exams, Group::TimeSlots]);
        &self.state.exams[self.state.exams.len() - 1]
    }

    /// Patch an exam; date/time/title changes repatch the linked slot in
    /// place. A slot that was never derived is not created retroactively.
    pub fn update_exam(&mut self, id: &str, patch: ExamPatch) -> Option<&Exam> {
        let pos = self.state.exams.iter().position(|e| e.id == id)?;
        let reschedules =
            patch.title.is_some() || patch.date.is_some() || patch.time.is_some();
        {
            let exam = &mut self.state.exams[pos];
            if let Some(title) = patch.title {
                exam.title = title;
            }
            if let Some(subject) = patch.subject {
                exam.subject = subject;
            }
            if let Some(date) = patch.date {
                exam.date = date;
            }
            if let Some(time) = patch.time {
                exam.time = Some(time);
            }
            if let Some(location) = patch.location {
                exam.location = Some(location);
            }
            if let Some(description) = patch.description {
                exam.description = Some(description);
            }
        }
        if reschedules {
            let exam = self.state.exams[pos].clone();
            slots::repatch_exam_slot(
                &mut self.state.slots,
                &exam,
                self.config.slots.exam_minutes,
            );
        }
        self.persist(&[Group::Exams, Group::TimeSlots]);
        Some(&self.state.exams[pos])
    }

    /// Delete an exam and cascade to every slot referencing it.
    pub fn delete_exam(&mut self, id: &str) -> bool {
        let before = self.state.exams.len();
        self.state.exams.retain(|e| e.id != id);
        if self.state.exams.len() == before {
            return false;
        }
        self.state
            .slots
            .retain(|s| s.related_item_id.as_deref() != Some(id));
        self.persist(&[Group::Exams, Group::TimeSlots]);
        true
    }

    // === Time slots (user-authored) ===

    pub fn add_slot(&mut self, new: NewSlot) -> &TimeSlot {
        let slot = TimeSlot {
            id: self.ids.next("slot"),
            title: new.title,
            date: new.date,
            start: new.start,
            end: new.end,
            kind: new.kind,
            description: new.description,
            related_item_id: None,
        };
        self.state.slots.push(slot);
        self.persist(&[Group::TimeSlots]);
        &self.state.slots[self.state.slots.len() - 1]
    }

    pub fn update_slot(&mut self, id: &str, patch: SlotPatch) -> Option<&TimeSlot> {
        let pos = self.state.slots.iter().position(|s| s.id == id)?;
        {
            let slot = &mut self.state.slots[pos];
            if let Some(title) = patch.title {
                slot.title = title;
            }
            if let Some(date) = patch.date {
                slot.date = date;
            }
            if let Some(start) = patch.start {
                slot.start = start;
            }
            if let Some(end) = patch.end {
                slot.end = end;
            }
            if let Some(description) = patch.description {
                slot.description = Some(description);
            }
        }
        self.persist(&[Group::TimeSlots]);
        Some(&self.state.slots[pos])
    }

    pub fn delete_slot(&mut self, id: &str) -> bool {
        let before = self.state.slots.len();
        self.state.slots.retain(|s| s.id != id);
        if self.state.slots.len() == before {
            return false;
        }
        self.persist(&[Group::TimeSlots]);
        true
    }

    // === Habits & goals ===

    pub fn add_habit(&mut self, title: impl Into<String>) -> &Habit {
        self.push_habit(title.into(), false, None)
    }

    pub fn add_goal(
        &mut self,
        title: impl Into<String>,
        target_date: Option<NaiveDate>,
    ) -> &Habit {
        self.push_habit(title.into(), true, target_date)
    }

    fn push_habit(&mut self, title: String, is_goal: bool, target_date: Option<NaiveDate>) -> &Habit {
        let habit = Habit {
            id: self.ids.next("habit"),
            title,
            streak: 0,
            completed_dates: Default::default(),
            is_goal,
            progress: 0,
            target_date,
            created_at: Utc::now(),
        };
        self.state.habits.push(habit);
        self.persist(&[Group::Habits]);
        &self.state.habits[self.state.habits.len() - 1]
    }

    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> Option<&Habit> {
        let pos = self.state.habits.iter().position(|h| h.id == id)?;
        {
            let habit = &mut self.state.habits[pos];
            if let Some(title) = patch.title {
                habit.title = title;
            }
            if let Some(target_date) = patch.target_date {
                habit.target_date = Some(target_date);
            }
        }
        self.persist(&[Group::Habits]);
        Some(&self.state.habits[pos])
    }

    /// Toggle a habit's completion for `today`, maintaining the streak
    /// incrementally and moving XP by the fixed delta.
    pub fn toggle_habit_on(&mut self, id: &str, today: NaiveDate) -> Option<&Habit> {
        let pos = self.state.habits.iter().position(|h| h.id == id)?;
        {
            let habit = &mut self.state.habits[pos];
            if habit.completed_dates.contains(&today) {
                habit.completed_dates.remove(&today);
                habit.streak = streak::after_uncompleting(habit.streak);
                self.state.stats.apply(-COMPLETION_XP);
            } else {
                habit.streak = streak::after_completing(habit.streak, &habit.completed_dates, today);
                habit.completed_dates.insert(today);
                self.state.stats.apply(COMPLETION_XP);
            }
        }
        self.persist(&[Group::Habits, Group::Stats]);
        Some(&self.state.habits[pos])
    }

    /// Set a goal's progress; crossing 100 forward awards the completion
    /// delta, dropping back below reverts it. Non-goals store the value
    /// without gamification.
    pub fn set_goal_progress(&mut self, id: &str, progress: u8) -> Option<&Habit> {
        let pos = self.state.habits.iter().position(|h| h.id == id)?;
        {
            let habit = &mut self.state.habits[pos];
            let was_done = habit.progress >= 100;
            habit.progress = progress;
            let now_done = habit.progress >= 100;
            if habit.is_goal {
                if !was_done && now_done {
                    self.state.stats.apply(COMPLETION_XP);
                } else if was_done && !now_done {
                    self.state.stats.apply(-COMPLETION_XP);
                }
            }
        }
        self.persist(&[Group::Habits, Group::Stats]);
        Some(&self.state.habits[pos])
    }

    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        if self.state.habits.len() == before {
            return false;
        }
        self.persist(&[Group::Habits]);
        true
    }

    // === Grades ===

    pub fn add_grade(&mut self, new: NewGrade) -> &Grade {
        let grade = Grade {
            id: self.ids.next("grade"),
            title: new.title,
            course: new.course,
            score: new.score,
            max_score: new.max_score,
            date: new.date,
        };
        self.state.grades.push(grade);
        self.persist(&[Group::Grades]);
        &self.state.grades[self.state.grades.len() - 1]
    }

    pub fn update_grade(&mut self, id: &str, patch: GradePatch) -> Option<&Grade> {
        let pos = self.state.grades.iter().position(|g| g.id == id)?;
        {
            let grade = &mut self.state.grades[pos];
            if let Some(title) = patch.title {
                grade.title = title;
            }
            if let Some(course) = patch.course {
                grade.course = course;
            }
            if let Some(score) = patch.score {
                grade.score = score;
            }
            if let Some(max_score) = patch.max_score {
                grade.max_score = max_score;
            }
            if let Some(date) = patch.date {
                grade.date = date;
            }
        }
        self.persist(&[Group::Grades]);
        Some(&self.state.grades[pos])
    }

    pub fn delete_grade(&mut self, id: &str) -> bool {
        let before = self.state.grades.len();
        self.state.grades.retain(|g| g.id != id);
        if self.state.grades.len() == before {
            return false;
        }
        self.persist(&[Group::Grades]);
        true
    }

    // === Journal ===

    pub fn add_journal_entry(&mut self, new: NewJournalEntry) -> &JournalEntry {
        let entry = JournalEntry {
            id: self.ids.next("journal"),
            title: new.title,
            date: new.date,
            content: new.content,
            created_at: Utc::now(),
        };
        self.state.journal.push(entry);
        self.persist(&[Group::Journal]);
        &self.state.journal[self.state.journal.len() - 1]
    }

    pub fn update_journal_entry(&mut self, id: &str, patch: JournalPatch) -> Option<&JournalEntry> {
        let pos = self.state.journal.iter().position(|j| j.id == id)?;
        {
            let entry = &mut self.state.journal[pos];
            if let Some(title) = patch.title {
                entry.title = title;
            }
            if let Some(date) = patch.date {
                entry.date = date;
            }
            if let Some(content) = patch.content {
                entry.content = content;
            }
        }
        self.persist(&[Group::Journal]);
        Some(&self.state.journal[pos])
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> bool {
        let before = self.state.journal.len();
        self.state.journal.retain(|j| j.id != id);
        if self.state.journal.len() == before {
            return false;
        }
        self.persist(&[Group::Journal]);
        true
    }

    // === Reading list ===

    pub fn add_reading_item(
        &mut self,
        title: impl Into<String>,
        author: Option<String>,
    ) -> &ReadingItem {
        let item = ReadingItem {
            id: self.ids.next("reading"),
            title: title.into(),
            author,
            completed: false,
        };
        self.state.reading.push(item);
        self.persist(&[Group::Reading]);
        &self.state.reading[self.state.reading.len() - 1]
    }

    pub fn toggle_reading_item(&mut self, id: &str) -> Option<&ReadingItem> {
        let pos = self.state.reading.iter().position(|r| r.id == id)?;
        {
            let item = &mut self.state.reading[pos];
            item.completed = !item.completed;
            let delta = if item.completed {
                COMPLETION_XP
            } else {
                -COMPLETION_XP
            };
            self.state.stats.apply(delta);
        }
        self.persist(&[Group::Reading, Group::Stats]);
        Some(&self.state.reading[pos])
    }

    pub fn delete_reading_item(&mut self, id: &str) -> bool {
        let before = self.state.reading.len();
        self.state.reading.retain(|r| r.id != id);
        if self.state.reading.len() == before {
            return false;
        }
        self.persist(&[Group::Reading]);
        true
    }

    // === Wishlist ===

    pub fn add_wishlist_item(
        &mut self,
        title: impl Into<String>,
        price: Option<f64>,
    ) -> &WishlistItem {
        let item = WishlistItem {
            id: self.ids.next("wishlist"),
            title: title.into(),
            price,
            purchased: false,
        };
        self.state.wishlist.push(item);
        self.persist(&[Group::Wishlist]);
        &self.state.wishlist[self.state.wishlist.len() - 1]
    }

    pub fn toggle_wishlist_purchased(&mut self, id: &str) -> Option<&WishlistItem> {
        let pos = self.state.wishlist.iter().position(|w| w.id == id)?;
        {
            let item = &mut self.state.wishlist[pos];
            item.purchased = !item.purchased;
            let delta = if item.purchased {
                WISHLIST_XP
            } else {
                -WISHLIST_XP
            };
            self.state.stats.apply(delta);
        }
        self.persist(&[Group::Wishlist, Group::Stats]);
        Some(&self.state.wishlist[pos])
    }

    pub fn delete_wishlist_item(&mut self, id: &str) -> bool {
        let before = self.state.wishlist.len();
        self.state.wishlist.retain(|w| w.id != id);
        if self.state.wishlist.len() == before {
            return false;
        }
        self.persist(&[Group::Wishlist]);
        true
    }

    // === Study tasks ===

    /// Create a study task. Carries a small one-way XP award; deleting the
    /// task later does not claw it back.
    pub fn add_study_task(&mut self, new: NewStudyTask) -> &StudyTask {
        let task = StudyTask {
            id: self.ids.next("study"),
            title: new.title,
            date: new.date,
            time: new.time,
            duration_min: new.duration_min,
        };
        self.state.study_tasks.push(task);
        self.state.stats.apply(STUDY_TASK_XP);
        self.persist(&[Group::StudyTasks, Group::Stats]);
        &self.state.study_tasks[self.state.study_tasks.len() - 1]
    }

    pub fn delete_study_task(&mut self, id: &str) -> bool {
        let before = self.state.study_tasks.len();
        self.state.study_tasks.retain(|s| s.id != id);
        if self.state.study_tasks.len() == before {
            return false;
        }
        self.persist(&[Group::StudyTasks]);
        true
    }

    // === Pomodoro ===

    /// Record a completed session. Awards one XP per five focus minutes;
    /// sessions are never un-completed, so there is no reversal.
    pub fn log_pomodoro_session(
        &mut self,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        focus_min: u32,
        break_min: u32,
        task_id: Option<String>,
    ) -> &PomodoroSession {
        let session = PomodoroSession {
            id: self.ids.next("pomodoro"),
            started_at,
            ended_at,
            focus_min,
            break_min,
            date: started_at.date_naive(),
            task_id,
        };
        self.state.pomodoro_sessions.push(session);
        self.state.stats.apply(pomodoro_xp(focus_min));
        self.persist(&[Group::Pomodoro, Group::Stats]);
        &self.state.pomodoro_sessions[self.state.pomodoro_sessions.len() - 1]
    }
}
