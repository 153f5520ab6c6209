//! Copy-to-clipboard command

use colored::Colorize;
use tracing::warn;

use crate::api::short_url;
use crate::errors::JshortError;
use crate::interfaces::cli::CliError;
use crate::store::LinkCollection;

pub fn copy_short_url(
    collection: &LinkCollection,
    base_url: &str,
    short_code: &str,
) -> Result<(), CliError> {
    let link = collection.find_by_code(short_code).ok_or_else(|| {
        CliError::from(JshortError::not_found(format!(
            "No stored link with code {}",
            short_code
        )))
    })?;

    let url = short_url(base_url, &link.short_code);

    // Clipboard failure is soft: log it and fall back to printing the URL
    match try_copy(&url) {
        Ok(()) => {
            println!("{} Copied: {}", "✓".bold().green(), url.cyan());
        }
        Err(e) => {
            warn!("Clipboard unavailable: {}", e.message());
            println!("{} Clipboard unavailable, copy manually:", "ℹ".bold().blue());
            println!("  {}", url.cyan());
        }
    }
    Ok(())
}

fn try_copy(text: &str) -> Result<(), JshortError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| JshortError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| JshortError::clipboard(e.to_string()))
}
