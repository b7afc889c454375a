//! # Studydesk Core Library
//!
//! This library provides the state and business-logic engine for the
//! Studydesk student dashboard. Page components, forms, and charts are thin
//! collaborators over this crate: they call the session's named operations
//! and read its collections, but hold no rules of their own.
//!
//! ## Architecture
//!
//! - **Session**: the per-user entity store; owns every collection for the
//!   active user and exposes all public operations
//! - **Storage**: SQLite-backed per-user key/value groups plus TOML-based
//!   configuration
//! - **Gamification**: XP awards/reversals on completion transitions and
//!   the derived level
//! - **Aggregation**: calendar projection, habit streaks, pomodoro stats
//!
//! ## Key Components
//!
//! - [`Session`]: state engine handle collaborators operate through
//! - [`StateDb`]: per-user group persistence
//! - [`Config`]: application configuration management
//! - [`CalendarEvent`]: unified calendar projection item

pub mod calendar;
pub mod error;
pub mod gamification;
pub mod id;
pub mod model;
pub mod pomodoro;
pub mod session;
pub mod slots;
pub mod storage;
pub mod streak;

pub use calendar::{CalendarEvent, EventKind};
pub use error::{ConfigError, CoreError, StorageError};
pub use gamification::{level_for_xp, XpState};
pub use id::IdGenerator;
pub use model::{
    Assignment, AssignmentStatus, Exam, Grade, Habit, JournalEntry, PomodoroSession, ReadingItem,
    SlotKind, StudyTask, Task, ThemeMode, TimeSlot, WishlistItem,
};
pub use pomodoro::{DailyPomodoro, PomodoroStats};
pub use session::Session;
pub use storage::{Config, Group, StateDb};
