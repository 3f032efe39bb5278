//! Command-line entry point: scrape one date and print the result as JSON

use chrono::{Local, NaiveDate};
use clap::Parser;
use gazette_dl::{Config, GazetteClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Scrape a day's gazette editions and their publications
#[derive(Debug, Parser)]
#[command(name = "gazette-dl", version, about)]
struct Cli {
    /// Date to scrape (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the maximum number of concurrent body fetches
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Scrape failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> gazette_dl::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(max) = cli.max_concurrency {
        config.fetch.max_concurrent_fetches = max;
    }

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let client = GazetteClient::new(config)?;
    let editions = client.scrape(date).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&editions)?
    } else {
        serde_json::to_string(&editions)?
    };
    println!("{json}");
    Ok(())
}
