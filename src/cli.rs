//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for jshort using clap's derive
//! macros. Command execution lives in `interfaces::cli`.

use clap::{Parser, Subcommand};

use crate::filter::StatusFilter;

/// JShort - terminal client for the JShort URL shortener
#[derive(Parser)]
#[command(name = "jshort")]
#[command(version)]
#[command(about = "Shorten URLs and manage your short links", long_about = None)]
pub struct Cli {
    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL and store the result locally
    Shorten {
        /// Absolute http(s) URL to shorten
        url: String,
    },

    /// List stored short links
    List {
        /// Keep only links in this lifecycle bucket
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Case-insensitive search over original URL and short code
        #[arg(long)]
        search: Option<String>,
    },

    /// Remove a stored link by id
    Remove {
        /// Record id (as shown by `list`)
        id: String,
    },

    /// Copy a short URL to the clipboard
    Copy {
        /// Short code of a stored link
        short_code: String,
    },

    /// Show collection statistics
    Stats,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: jshort.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
