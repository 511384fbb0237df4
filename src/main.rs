use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat, load_config};
use core_types::{CampaignInputs, rate_from_percent};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod format;
mod render;

use format::{CurrencyFormatter, MoneyFormatter};

/// The main entry point for the ROI Pilot application.
fn main() -> Result<()> {
    // Optional .env file with ROI_* overrides
    dotenvy::dotenv().ok();

    // Logs go to stderr so JSON on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Evaluate(args) => handle_evaluate(args, &config),
        Commands::Rates => {
            handle_rates(&config);
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Find out whether a campaign turns a profit before spending more money on it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./roi.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a campaign's profitability and break-even conversion rate.
    #[command(alias = "e")]
    Evaluate(EvaluateArgs),
    /// Show the candidate conversion rates used for the zone analysis.
    Rates,
}

#[derive(Parser)]
struct EvaluateArgs {
    /// What you pay per click today. An average is fine.
    #[arg(long)]
    cpc: Decimal,

    /// What you earn per sale, net of fees.
    #[arg(long)]
    commission: Decimal,

    /// The conversion rate you expect your page to reach, in percent (e.g. 1.5).
    #[arg(long = "conversion-pct")]
    conversion_pct: Decimal,

    /// Candidate conversion rates in percent, comma separated and ascending.
    /// Overrides the configured candidates.
    #[arg(long, value_delimiter = ',')]
    rates: Option<Vec<Decimal>>,

    /// Output format. Overrides the configured one.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the orchestration of a single campaign evaluation.
fn handle_evaluate(args: EvaluateArgs, config: &Config) -> Result<()> {
    let conversion_rate = rate_from_percent(args.conversion_pct, config.input.max_conversion_pct)?;
    let inputs = CampaignInputs::new(args.cpc, args.commission, conversion_rate)?;

    let candidate_rates = match args.rates {
        Some(rates) => rates
            .into_iter()
            .map(|pct| rate_from_percent(pct, dec!(100)))
            .collect::<Result<Vec<_>, _>>()?,
        None => config.scenarios.candidate_rates.clone(),
    };

    let engine = AnalyticsEngine::with_candidate_rates(candidate_rates)?;
    let evaluation = engine.evaluate(&inputs)?;

    tracing::info!(status = %evaluation.status, "Evaluation complete");

    match args.format.unwrap_or(config.display.output) {
        OutputFormat::Table => {
            let formatter = CurrencyFormatter::from(&config.display);
            print!("{}", render::render_report(&evaluation, &formatter));
        }
        OutputFormat::Json => {
            let json = render::render_json(&evaluation).context("Failed to serialize evaluation")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Prints the configured candidate conversion rates.
fn handle_rates(config: &Config) {
    let formatter = CurrencyFormatter::from(&config.display);
    for rate in &config.scenarios.candidate_rates {
        println!("{}", formatter.percent(*rate));
    }
}
