//! Reading list commands for CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReadingAction {
    /// Add a book or article to the reading list
    Add {
        /// Title
        title: String,
        /// Author
        #[arg(long)]
        author: Option<String>,
    },
    /// List reading items
    List,
    /// Toggle completion
    Toggle {
        /// Item ID
        id: String,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },
}

pub fn run(action: ReadingAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        ReadingAction::Add { title, author } => {
            let item = session.add_reading_item(title, author);
            println!("{}", serde_json::to_string_pretty(item)?);
        }
        ReadingAction::List => {
            println!("{}", serde_json::to_string_pretty(session.reading_list())?);
        }
        ReadingAction::Toggle { id } => match session.toggle_reading_item(&id) {
            Some(item) => println!("{}", serde_json::to_string_pretty(item)?),
            None => println!("Reading item not found: {id}"),
        },
        ReadingAction::Delete { id } => {
            if session.delete_reading_item(&id) {
                println!("Reading item deleted: {id}");
            } else {
                println!("Reading item not found: {id}");
            }
        }
    }
    Ok(())
}
