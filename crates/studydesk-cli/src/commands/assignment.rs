//! Assignment management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::{AssignmentStatus, NewAssignment};

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// Create a new assignment; a time value also schedules a slot
    Add {
        /// Assignment title
        title: String,
        /// Course code
        #[arg(long)]
        course: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,
        /// Due time (HH:mm); derives a one-hour time slot
        #[arg(long)]
        time: Option<String>,
    },
    /// List assignments
    List,
    /// Set completion status (not-started, in-progress, completed)
    Status {
        /// Assignment ID
        id: String,
        /// New status
        status: String,
    },
    /// Delete an assignment and its derived slots
    Delete {
        /// Assignment ID
        id: String,
    },
}

pub fn run(
    action: AssignmentAction,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        AssignmentAction::Add {
            title,
            course,
            due,
            time,
        } => {
            let assignment = session.add_assignment(NewAssignment {
                title,
                course,
                due_date: due,
                time,
            });
            println!("{}", serde_json::to_string_pretty(assignment)?);
        }
        AssignmentAction::List => {
            println!("{}", serde_json::to_string_pretty(session.assignments())?);
        }
        AssignmentAction::Status { id, status } => {
            let status = AssignmentStatus::parse(&status);
            match session.set_assignment_status(&id, status) {
                Some(assignment) => println!("{}", serde_json::to_string_pretty(assignment)?),
                None => println!("Assignment not found: {id}"),
            }
        }
        AssignmentAction::Delete { id } => {
            if session.delete_assignment(&id) {
                println!("Assignment deleted: {id}");
            } else {
                println!("Assignment not found: {id}");
            }
        }
    }
    Ok(())
}
