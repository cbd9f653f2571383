mod cli;
mod commands;
mod io;

use anon_config::Config;
use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout can carry the redacted text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if cli.list {
        return commands::list::handle();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    commands::anonymize::handle(&cli, &config)
}
