//! Habit and goal tracking commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studydesk_core::model::HabitPatch;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        /// Habit title
        title: String,
    },
    /// Create a goal with optional target date
    AddGoal {
        /// Goal title
        title: String,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<NaiveDate>,
    },
    /// List habits and goals
    List,
    /// Toggle completion for a day (defaults to today)
    Toggle {
        /// Habit ID
        id: String,
        /// Day to toggle (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Set goal progress (0-100)
    Progress {
        /// Habit ID
        id: String,
        /// Progress percentage
        value: u8,
    },
    /// Consecutive-run length ending at a date (for the monthly heatmap)
    Run {
        /// Habit ID
        id: String,
        /// Anchor date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Rename or retarget a habit
    Update {
        /// Habit ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// New target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<NaiveDate>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;
    let today = || Local::now().date_naive();

    match action {
        HabitAction::Add { title } => {
            let habit = session.add_habit(title);
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::AddGoal { title, target } => {
            let goal = session.add_goal(title, target);
            println!("{}", serde_json::to_string_pretty(goal)?);
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(session.habits())?);
        }
        HabitAction::Toggle { id, date } => {
            match session.toggle_habit_on(&id, date.unwrap_or_else(today)) {
                Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
                None => println!("Habit not found: {id}"),
            }
        }
        HabitAction::Progress { id, value } => match session.set_goal_progress(&id, value) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Run { id, date } => {
            let run = session.habit_run_length(&id, date.unwrap_or_else(today));
            println!("{run}");
        }
        HabitAction::Update { id, title, target } => {
            let patch = HabitPatch {
                title,
                target_date: target,
            };
            match session.update_habit(&id, patch) {
                Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
                None => println!("Habit not found: {id}"),
            }
        }
        HabitAction::Delete { id } => {
            if session.delete_habit(&id) {
                println!("Habit deleted: {id}");
            } else {
                println!("Habit not found: {id}");
            }
        }
    }
    Ok(())
}
