//! CLI interface module
//!
//! Command execution on top of the clap definitions in `crate::cli`. Every
//! command works against the shared [`LinkCollection`]; the presentation
//! here never re-implements store, classifier or filter logic.

pub mod commands;

use std::fmt;

use crate::api::HttpShortener;
use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::JshortError;
use crate::storage::create_snapshot;
use crate::store::LinkCollection;

use commands::{config_generate, copy_short_url, list_links, remove_link, shorten_url, show_stats};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<JshortError> for CliError {
    fn from(err: JshortError) -> Self {
        match err {
            JshortError::FileOperation(_) | JshortError::Serialization(_) => {
                CliError::StorageError(err.format_simple())
            }
            _ => CliError::CommandError(err.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, api_url: Option<String>) -> Result<(), CliError> {
    // Config generation needs neither snapshot nor backend
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let config = get_config();
    let base_url = api_url.unwrap_or_else(|| config.api.base_url.clone());
    let mut collection = LinkCollection::load(create_snapshot(config)).await;

    match cmd {
        Commands::Shorten { url } => {
            let shortener = HttpShortener::new(base_url);
            shorten_url(&mut collection, &shortener, &url).await
        }

        Commands::List { status, search } => {
            list_links(&collection, &base_url, status, search.as_deref().unwrap_or(""))
        }

        Commands::Remove { id } => remove_link(&mut collection, &id).await,

        Commands::Copy { short_code } => copy_short_url(&collection, &base_url, &short_code),

        Commands::Stats => show_stats(&collection),

        Commands::Config { .. } => unreachable!("handled above"),
    }
}
