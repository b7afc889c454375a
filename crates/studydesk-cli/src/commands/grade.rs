//! Grade record commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::{GradePatch, NewGrade};

#[derive(Subcommand)]
pub enum GradeAction {
    /// Record a grade
    Add {
        /// Assessment title
        title: String,
        /// Course code
        #[arg(long)]
        course: String,
        /// Points earned
        #[arg(long)]
        score: f64,
        /// Points possible
        #[arg(long)]
        max: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// List grades
    List,
    /// Correct a grade
    Update {
        /// Grade ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        score: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a grade
    Delete {
        /// Grade ID
        id: String,
    },
}

pub fn run(action: GradeAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        GradeAction::Add {
            title,
            course,
            score,
            max,
            date,
        } => {
            let grade = session.add_grade(NewGrade {
                title,
                course,
                score,
                max_score: max,
                date,
            });
            println!("{}", serde_json::to_string_pretty(grade)?);
        }
        GradeAction::List => {
            println!("{}", serde_json::to_string_pretty(session.grades())?);
        }
        GradeAction::Update {
            id,
            title,
            course,
            score,
            max,
            date,
        } => {
            let patch = GradePatch {
                title,
                course,
                score,
                max_score: max,
                date,
            };
            match session.update_grade(&id, patch) {
                Some(grade) => println!("{}", serde_json::to_string_pretty(grade)?),
                None => println!("Grade not found: {id}"),
            }
        }
        GradeAction::Delete { id } => {
            if session.delete_grade(&id) {
                println!("Grade deleted: {id}");
            } else {
                println!("Grade not found: {id}");
            }
        }
    }
    Ok(())
}
