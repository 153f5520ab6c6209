use clap::Parser;
use tracing_subscriber::EnvFilter;

use jshort::cli::Cli;
use jshort::config;
use jshort::interfaces::cli::run_cli_command;

#[tokio::main]
async fn main() {
    config::init_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::get_config().logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_cli_command(cli.command, cli.api_url).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
