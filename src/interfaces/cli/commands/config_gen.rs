//! Config generation command

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::interfaces::cli::CliError;

pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "jshort.example.toml".to_string());

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    let sample = Config::generate_sample_config();
    fs::write(&path, sample).map_err(|e| CliError::StorageError(e.to_string()))?;

    println!("{} Wrote sample config to {}", "✓".bold().green(), path.cyan());
    Ok(())
}
