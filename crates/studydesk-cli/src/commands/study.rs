//! Study task planning commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::NewStudyTask;

#[derive(Subcommand)]
pub enum StudyAction {
    /// Plan a study task (awards a small amount of XP)
    Add {
        /// Study task title
        title: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:mm)
        #[arg(long)]
        time: Option<String>,
        /// Planned duration in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// List study tasks
    List,
    /// Delete a study task
    Delete {
        /// Study task ID
        id: String,
    },
}

pub fn run(action: StudyAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        StudyAction::Add {
            title,
            date,
            time,
            duration,
        } => {
            let task = session.add_study_task(NewStudyTask {
                title,
                date,
                time,
                duration_min: duration,
            });
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        StudyAction::List => {
            println!("{}", serde_json::to_string_pretty(session.study_tasks())?);
        }
        StudyAction::Delete { id } => {
            if session.delete_study_task(&id) {
                println!("Study task deleted: {id}");
            } else {
                println!("Study task not found: {id}");
            }
        }
    }
    Ok(())
}
