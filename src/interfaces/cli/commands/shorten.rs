//! Shorten command

use colored::Colorize;

use crate::api::{HttpShortener, Shortener};
use crate::classify::days_until_expiry;
use crate::interfaces::cli::CliError;
use crate::store::LinkCollection;

pub async fn shorten_url(
    collection: &mut LinkCollection,
    shortener: &HttpShortener,
    url: &str,
) -> Result<(), CliError> {
    let link = collection.submit(url, shortener).await?;

    println!(
        "{} Shortened: {}",
        "✓".bold().green(),
        link.original_url.blue().underline()
    );
    println!("  {}", shortener.short_url(&link.short_code).cyan().bold());
    println!(
        "  {} {}",
        "expires in".dimmed(),
        format!(
            "{} days",
            days_until_expiry(link.expires_at, chrono::Utc::now())
        )
        .yellow()
    );
    println!("  {} {}", "id:".dimmed(), link.id.dimmed());
    Ok(())
}
