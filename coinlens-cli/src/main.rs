//! Coinlens CLI — fetch a crypto market snapshot and write the analysis workbook.
//!
//! With no arguments, fetches the top 50 coins by market cap from CoinGecko and
//! writes `Crypto_Analysis.xlsx` to the working directory with three sheets:
//! the full table, the top 5 by market cap, and a metric/value summary.

use anyhow::{Context, Result};
use clap::Parser;
use coinlens_core::data::{CoinGeckoProvider, FetchError, JsonFileProvider, MarketDataProvider};
use coinlens_core::schema::to_frame;
use coinlens_core::MarketSummary;
use coinlens_runner::{run_pipeline, PipelineError, RunConfig, RunOutcome};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "coinlens",
    about = "Coinlens — crypto market snapshot to spreadsheet"
)]
struct Cli {
    /// Path to a TOML run configuration. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output workbook path. Overrides the configured path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Read records from a saved JSON response instead of the network.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output.path = output;
        config.validate()?;
    }

    let provider = build_provider(cli.input.as_deref(), &config)?;

    match run_pipeline(provider.as_ref(), &config) {
        Ok(RunOutcome::Exported {
            path,
            rows,
            summary,
        }) => {
            print_summary(rows, &summary);
            println!(
                "Analysis complete. Results saved to '{}'.",
                path.display()
            );
            Ok(())
        }
        Ok(RunOutcome::NothingToProcess) => {
            println!("No market data returned; nothing to export.");
            Ok(())
        }
        Err(PipelineError::Fetch(FetchError::Status { status })) => {
            eprintln!("Error fetching data: {status}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coinlens=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_provider(input: Option<&Path>, config: &RunConfig) -> Result<Box<dyn MarketDataProvider>> {
    match input {
        Some(path) => Ok(Box::new(JsonFileProvider::new(path))),
        None => {
            let provider = CoinGeckoProvider::new(config.source.base_url.as_str())
                .context("failed to set up CoinGecko client")?;
            Ok(Box::new(provider))
        }
    }
}

fn print_summary(rows: usize, summary: &MarketSummary) {
    println!();
    println!("=== Market Snapshot ===");
    println!("Coins:          {rows}");
    println!("Average Price:  ${:.2}", summary.mean_price);
    println!(
        "Top Gainer:     {} ({:+.2}%)",
        summary.highest_change.name, summary.highest_change.price_change_percentage_24h
    );
    println!(
        "Top Loser:      {} ({:+.2}%)",
        summary.lowest_change.name, summary.lowest_change.price_change_percentage_24h
    );
    println!();
    match to_frame(&summary.top) {
        Ok(frame) => println!("{frame}"),
        Err(e) => warn!(error = %e, "could not render top coins"),
    }
    println!();
}
