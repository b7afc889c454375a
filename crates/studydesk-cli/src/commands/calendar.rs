//! Unified calendar commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::CalendarEvent;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// List calendar events, optionally for one day
    List {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(
    action: CalendarAction,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(user)?;

    match action {
        CalendarAction::List { date } => {
            let events: Vec<CalendarEvent> = session
                .calendar_events()
                .filter(|e| date.map_or(true, |d| e.date == d))
                .collect();
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }
    Ok(())
}
