//! Time slot commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::{NewSlot, SlotKind, SlotPatch};

#[derive(Subcommand)]
pub enum SlotAction {
    /// Create a user-authored time slot
    Add {
        /// Slot title
        title: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:mm)
        #[arg(long)]
        start: String,
        /// End time (HH:mm)
        #[arg(long)]
        end: String,
        /// Slot kind: assignment, test, study, custom (default: study)
        #[arg(long, default_value = "study")]
        kind: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// List time slots
    List,
    /// Update a slot
    Update {
        /// Slot ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New start time (HH:mm)
        #[arg(long)]
        start: Option<String>,
        /// New end time (HH:mm)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a slot
    Delete {
        /// Slot ID
        id: String,
    },
}

fn parse_kind(s: &str) -> SlotKind {
    match s {
        "assignment" => SlotKind::Assignment,
        "test" => SlotKind::Test,
        "study" => SlotKind::Study,
        _ => SlotKind::Custom,
    }
}

pub fn run(action: SlotAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        SlotAction::Add {
            title,
            date,
            start,
            end,
            kind,
            description,
        } => {
            let slot = session.add_slot(NewSlot {
                title,
                date,
                start,
                end,
                kind: parse_kind(&kind),
                description,
            });
            println!("{}", serde_json::to_string_pretty(slot)?);
        }
        SlotAction::List => {
            println!("{}", serde_json::to_string_pretty(session.time_slots())?);
        }
        SlotAction::Update {
            id,
            title,
            date,
            start,
            end,
            description,
        } => {
            let patch = SlotPatch {
                title,
                date,
                start,
                end,
                description,
            };
            match session.update_slot(&id, patch) {
                Some(slot) => println!("{}", serde_json::to_string_pretty(slot)?),
                None => println!("Slot not found: {id}"),
            }
        }
        SlotAction::Delete { id } => {
            if session.delete_slot(&id) {
                println!("Slot deleted: {id}");
            } else {
                println!("Slot not found: {id}");
            }
        }
    }
    Ok(())
}
