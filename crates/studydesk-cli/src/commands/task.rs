//! Task management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::model::{NewTask, TaskPatch};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Due time (HH:mm)
        #[arg(long)]
        time: Option<String>,
    },
    /// List tasks
    List,
    /// Toggle completion
    Toggle {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// New due time (HH:mm)
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        TaskAction::Add { title, due, time } => {
            let task = session.add_task(NewTask {
                title,
                due_date: due,
                time,
            });
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(session.tasks())?);
        }
        TaskAction::Toggle { id } => match session.toggle_task(&id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Update { id, title, due, time } => {
            let patch = TaskPatch {
                title,
                due_date: due,
                time,
            };
            match session.update_task(&id, patch) {
                Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
                None => println!("Task not found: {id}"),
            }
        }
        TaskAction::Delete { id } => {
            if session.delete_task(&id) {
                println!("Task deleted: {id}");
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
