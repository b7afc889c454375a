//! SQLite-backed per-user state storage.
//!
//! One row per (user id, logical group), each holding the full JSON
//! document for that group. Writes are last-write-wins; reads that find
//! nothing, or find a payload that no longer parses, fall back to the
//! group's default value instead of surfacing an error.

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::data_dir;
use crate::error::StorageError;

/// Logical persistence groups; one keyspace entry per (user, group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Tasks,
    Assignments,
    Exams,
    TimeSlots,
    Habits,
    Grades,
    Pomodoro,
    Journal,
    Reading,
    Wishlist,
    StudyTasks,
    Stats,
    Settings,
}

impl Group {
    /// Every group, in hydration order.
    pub const ALL: [Group; 13] = [
        Group::Tasks,
        Group::Assignments,
        Group::Exams,
        Group::TimeSlots,
        Group::Habits,
        Group::Grades,
        Group::Pomodoro,
        Group::Journal,
        Group::Reading,
        Group::Wishlist,
        Group::StudyTasks,
        Group::Stats,
        Group::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Assignments => "assignments",
            Self::Exams => "exams",
            Self::TimeSlots => "time_slots",
            Self::Habits => "habits",
            Self::Grades => "grades",
            Self::Pomodoro => "pomodoro_sessions",
            Self::Journal => "journal",
            Self::Reading => "reading_list",
            Self::Wishlist => "wishlist",
            Self::StudyTasks => "study_tasks",
            Self::Stats => "stats",
            Self::Settings => "settings",
        }
    }
}

/// SQLite database holding every user's persisted groups.
pub struct StateDb {
    conn: Connection,
}

impl StateDb {
    /// Open the database at `~/.config/studydesk/studydesk.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("studydesk.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS state (
                user_id    TEXT NOT NULL,
                grp        TEXT NOT NULL,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, grp)
            );

            CREATE INDEX IF NOT EXISTS idx_state_user ON state(user_id);",
        )?;
        Ok(())
    }

    /// Raw read of one group's payload.
    pub fn kv_get(&self, user_id: &str, group: Group) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM state WHERE user_id = ?1 AND grp = ?2")?;
        let result = stmt.query_row(params![user_id, group.as_str()], |row| {
            row.get::<_, String>(0)
        });
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Raw last-write-wins write of one group's payload.
    pub fn kv_set(&self, user_id: &str, group: Group, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO state (user_id, grp, value, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![user_id, group.as_str(), value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Hydrate one group, falling back to `T::default()` when the row is
    /// missing, unreadable, or no longer parses.
    pub fn load_group<T>(&self, user_id: &str, group: Group) -> T
    where
        T: DeserializeOwned + Default,
    {
        let payload = match self.kv_get(user_id, group) {
            Ok(Some(payload)) => payload,
            Ok(None) => return T::default(),
            Err(e) => {
                tracing::warn!(user_id, group = group.as_str(), error = %e, "group read failed; using defaults");
                return T::default();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(user_id, group = group.as_str(), error = %e, "group payload unparsable; using defaults");
                T::default()
            }
        }
    }

    /// Persist the full current value of one group.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_group<T: Serialize>(
        &self,
        user_id: &str,
        group: Group,
        value: &T,
    ) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(value).map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        self.kv_set(user_id, group, &payload)?;
        Ok(())
    }

    /// Drop every group stored for a user.
    pub fn delete_user(&self, user_id: &str) -> Result<usize, rusqlite::Error> {
        self.conn
            .execute("DELETE FROM state WHERE user_id = ?1", params![user_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_roundtrip() {
        let db = StateDb::open_memory().unwrap();
        assert!(db.kv_get("ada", Group::Tasks).unwrap().is_none());
        db.kv_set("ada", Group::Tasks, "[]").unwrap();
        assert_eq!(db.kv_get("ada", Group::Tasks).unwrap().unwrap(), "[]");
    }

    #[test]
    fn groups_are_namespaced_per_user() {
        let db = StateDb::open_memory().unwrap();
        db.kv_set("ada", Group::Habits, "[1]").unwrap();
        db.kv_set("grace", Group::Habits, "[2]").unwrap();
        assert_eq!(db.kv_get("ada", Group::Habits).unwrap().unwrap(), "[1]");
        assert_eq!(db.kv_get("grace", Group::Habits).unwrap().unwrap(), "[2]");
    }

    #[test]
    fn malformed_payload_loads_as_default() {
        let db = StateDb::open_memory().unwrap();
        db.kv_set("ada", Group::Tasks, "{not json").unwrap();
        let tasks: Vec<crate::model::Task> = db.load_group("ada", Group::Tasks);
        assert!(tasks.is_empty());
    }

    #[test]
    fn save_then_load_group() {
        let db = StateDb::open_memory().unwrap();
        let stats = crate::gamification::XpState { xp: 150, level_up_pending: false };
        db.save_group("ada", Group::Stats, &stats).unwrap();
        let loaded: crate::gamification::XpState = db.load_group("ada", Group::Stats);
        assert_eq!(loaded.xp, 150);
    }

    #[test]
    fn delete_user_clears_all_groups() {
        let db = StateDb::open_memory().unwrap();
        db.kv_set("ada", Group::Tasks, "[]").unwrap();
        db.kv_set("ada", Group::Stats, "{}").unwrap();
        db.kv_set("grace", Group::Tasks, "[]").unwrap();
        assert_eq!(db.delete_user("ada").unwrap(), 2);
        assert!(db.kv_get("ada", Group::Tasks).unwrap().is_none());
        assert!(db.kv_get("grace", Group::Tasks).unwrap().is_some());
    }
}
