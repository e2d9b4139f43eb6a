//! Tokendrop CLI - Command-line front end for the claim state engine.

use clap::Parser;
use tokendrop_cli::commands;
use tokendrop_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr)
    let filter = EnvFilter::try_from_env("TOKENDROP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tokendrop_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config (defaults when the file does not exist)
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Status(args) => commands::execute_status(args, &config, &formatter).await?,
        Command::Quote(args) => commands::execute_quote(args, &config, &formatter).await?,
        Command::Watch(args) => commands::execute_watch(args, &config, &formatter).await?,
        Command::Claim(args) => commands::execute_claim(args, &config, &formatter).await?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter).await?,
    }

    Ok(())
}
