//! Wishlist commands for CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Add a wishlist item
    Add {
        /// Title
        title: String,
        /// Price
        #[arg(long)]
        price: Option<f64>,
    },
    /// List wishlist items
    List,
    /// Toggle purchased state
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

pub fn run(
    action: WishlistAction,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(user)?;

    match action {
        WishlistAction::Add { title, price } => {
            let item = session.add_wishlist_item(title, price);
            println!("{}", serde_json::to_string_pretty(item)?);
        }
        WishlistAction::List => {
            println!("{}", serde_json::to_string_pretty(session.wishlist())?);
        }
        WishlistAction::Toggle { id } => match session.toggle_wishlist_purchased(&id) {
            Some(item) => println!("{}", serde_json::to_string_pretty(item)?),
            None => println!("Wishlist item not found: {id}"),
        },
        WishlistAction::Delete { id } => {
            if session.delete_wishlist_item(&id) {
                println!("Wishlist item deleted: {id}");
            } else {
                println!("Wishlist item not found: {id}");
            }
        }
    }
    Ok(())
}
