//! CLI command modules, one per entity area.

pub mod assignment;
pub mod calendar;
pub mod exam;
pub mod grade;
pub mod habit;
pub mod journal;
pub mod pomodoro;
pub mod reading;
pub mod slot;
pub mod stats;
pub mod study;
pub mod task;
pub mod wishlist;

use studydesk_core::Session;

/// Resolve the acting user: `--user` flag, then `$STUDYDESK_USER`,
/// then `"local"`.
pub fn resolve_user(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("STUDYDESK_USER").ok())
        .unwrap_or_else(|| "local".to_string())
}

/// Open the session hydrated for the acting user.
pub fn open_session(user: Option<String>) -> Result<Session, Box<dyn std::error::Error>> {
    let mut session = Session::open()?;
    session.switch_user(&resolve_user(user));
    Ok(session)
}
