//! Remove command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::LinkCollection;

pub async fn remove_link(collection: &mut LinkCollection, id: &str) -> Result<(), CliError> {
    if collection.remove(id).await? {
        println!("{} Removed link {}", "✓".bold().green(), id.cyan());
    } else {
        // Removal is idempotent; an unknown id is informational, not an error
        println!("{} No link with id {}", "ℹ".bold().blue(), id.cyan());
    }
    Ok(())
}
