//! Pomodoro session log commands for CLI.

use chrono::{Duration, Utc};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Record a completed session ending now
    Log {
        /// Focus minutes
        #[arg(long)]
        focus: u32,
        /// Break minutes
        #[arg(long, default_value = "0")]
        r#break: u32,
        /// Task the session was spent on
        #[arg(long)]
        task: Option<String>,
    },
    /// List recorded sessions
    List,
}

pub fn run(
    action: PomodoroAction,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        PomodoroAction::Log {
            focus,
            r#break,
            task,
        } => {
            let ended_at = Utc::now();
            let started_at = ended_at - Duration::minutes(i64::from(focus + r#break));
            let record = session.log_pomodoro_session(started_at, ended_at, focus, r#break, task);
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        PomodoroAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.pomodoro_sessions())?
            );
        }
    }
    Ok(())
}
