//! Journal entry commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studydesk_core::model::{JournalPatch, NewJournalEntry};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// Entry title
        title: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Entry body
        #[arg(long, default_value = "")]
        content: String,
    },
    /// List journal entries
    List,
    /// Edit an entry
    Update {
        /// Entry ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New body
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: JournalAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        JournalAction::Add {
            title,
            date,
            content,
        } => {
            let entry = session.add_journal_entry(NewJournalEntry {
                title,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                content,
            });
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        JournalAction::List => {
            println!("{}", serde_json::to_string_pretty(session.journal_entries())?);
        }
        JournalAction::Update {
            id,
            title,
            date,
            content,
        } => {
            let patch = JournalPatch {
                title,
                date,
                content,
            };
            match session.update_journal_entry(&id, patch) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => println!("Entry not found: {id}"),
            }
        }
        JournalAction::Delete { id } => {
            if session.delete_journal_entry(&id) {
                println!("Entry deleted: {id}");
            } else {
                println!("Entry not found: {id}");
            }
        }
    }
    Ok(())
}
