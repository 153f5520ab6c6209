//! Stats command

use chrono::Utc;
use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::LinkCollection;

pub fn show_stats(collection: &LinkCollection) -> Result<(), CliError> {
    let stats = collection.stats(Utc::now());

    println!("{}", "Collection statistics:".bold().green());
    println!();
    println!(
        "  {} {}",
        "Total links:".bold(),
        stats.total_links.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Total accesses:".bold(),
        stats.total_accesses.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Active:".bold(),
        stats.active.to_string().green()
    );
    println!(
        "  {} {}",
        "Expiring in 7 days:".bold(),
        stats.expiring_soon.to_string().yellow()
    );
    println!(
        "  {} {}",
        "Expired:".bold(),
        stats.expired.to_string().red()
    );
    Ok(())
}
