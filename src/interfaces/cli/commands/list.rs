//! List links command

use chrono::Utc;
use colored::Colorize;

use crate::api::short_url;
use crate::classify::{LinkStatus, classify, days_until_expiry};
use crate::filter::{StatusFilter, filter_links};
use crate::interfaces::cli::CliError;
use crate::store::LinkCollection;

pub fn list_links(
    collection: &LinkCollection,
    base_url: &str,
    status: StatusFilter,
    search: &str,
) -> Result<(), CliError> {
    if collection.is_empty() {
        println!("{} No short links yet", "ℹ".bold().blue());
        return Ok(());
    }

    let now = Utc::now();
    let visible = filter_links(collection.links(), status, search, now);

    if visible.is_empty() {
        println!("{} No links match the current filter", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short links:".bold().green());
    println!();
    for link in &visible {
        let expiry = match classify(link, now) {
            LinkStatus::Expired => "(expired)".red().to_string(),
            LinkStatus::ExpiringSoon => {
                format!("(expires in {}d)", days_until_expiry(link.expires_at, now))
                    .yellow()
                    .to_string()
            }
            LinkStatus::Active => {
                format!("(expires in {}d)", days_until_expiry(link.expires_at, now))
                    .dimmed()
                    .to_string()
            }
        };

        println!(
            "  {} -> {} {}",
            link.short_code.cyan(),
            link.original_url.blue().underline(),
            expiry
        );
        println!(
            "     {} {} {}",
            short_url(base_url, &link.short_code).dimmed(),
            format!("(accesses: {})", link.access_count).dimmed().cyan(),
            format!("id: {}", link.id).dimmed()
        );
    }
    println!();
    println!(
        "{} Showing {} of {} links",
        "ℹ".bold().blue(),
        visible.len().to_string().green(),
        collection.len().to_string().green()
    );
    Ok(())
}
