//! Exam management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::{ExamPatch, NewExam};

#[derive(Subcommand)]
pub enum ExamAction {
    /// Create a new exam; a time value also schedules a two-hour slot
    Add {
        /// Exam title
        title: String,
        /// Subject
        #[arg(long)]
        subject: String,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:mm)
        #[arg(long)]
        time: Option<String>,
        /// Location
        #[arg(long)]
        location: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// List exams
    List,
    /// Update an exam; date/time/title changes move the linked slot
    Update {
        /// Exam ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New start time (HH:mm)
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an exam and its derived slots
    Delete {
        /// Exam ID
        id: String,
    },
}

pub fn run(action: ExamAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        ExamAction::Add {
            title,
            subject,
            date,
            time,
            location,
            description,
        } => {
            let exam = session.add_exam(NewExam {
                title,
                subject,
                date,
                time,
                location,
                description,
            });
            println!("{}", serde_json::to_string_pretty(exam)?);
        }
        ExamAction::List => {
            println!("{}", serde_json::to_string_pretty(session.exams())?);
        }
        ExamAction::Update {
            id,
            title,
            subject,
            date,
            time,
            location,
            description,
        } => {
            let patch = ExamPatch {
                title,
                subject,
                date,
                time,
                location,
                description,
            };
            match session.update_exam(&id, patch) {
                Some(exam) => println!("{}", serde_json::to_string_pretty(exam)?),
                None => println!("Exam not found: {id}"),
            }
        }
        ExamAction::Delete { id } => {
            if session.delete_exam(&id) {
                println!("Exam deleted: {id}");
            } else {
                println!("Exam not found: {id}");
            }
        }
    }
    Ok(())
}
