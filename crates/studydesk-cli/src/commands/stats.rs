//! XP, level, and pomodoro statistics commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studydesk_core::ThemeMode;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show XP and level
    Xp,
    /// Grant or revoke an ad hoc XP delta
    Award {
        /// XP delta (may be negative)
        delta: i64,
    },
    /// Pomodoro totals and the 7-day trailing series
    Pomodoro {
        /// Anchor day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Set the theme preference (system, light, dark)
    Theme {
        /// Theme mode
        mode: String,
    },
}

pub fn run(action: StatsAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        StatsAction::Xp => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "xp": session.xp(),
                    "level": session.level(),
                    "level_up": session.take_level_up(),
                }))?
            );
        }
        StatsAction::Award { delta } => {
            let total = session.add_xp(delta);
            println!("xp: {total} (level {})", session.level());
        }
        StatsAction::Pomodoro { today } => {
            let stats = session.pomodoro_stats(today.unwrap_or_else(|| Local::now().date_naive()));
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Theme { mode } => {
            let mode = match mode.as_str() {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => ThemeMode::System,
            };
            session.set_theme(mode);
            println!("{}", serde_json::to_string_pretty(&mode)?);
        }
    }
    Ok(())
}
