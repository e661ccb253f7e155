//! surfcast CLI
//!
//! Command-line access to the StormGlass point forecast.

#![allow(clippy::print_stdout)]

mod app_config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use integration_stormglass::{ForecastClient, ForecastPoint, StormGlassClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_config::AppConfig;

/// surfcast CLI
#[derive(Debug, Parser)]
#[command(name = "surfcast-cli")]
#[command(author, version, about = "Marine forecast from StormGlass", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.{toml,yaml,json} if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the normalized hourly forecast for a coordinate pair
    ///
    /// Example: surfcast-cli points --lat -33.79 --lng 151.28
    Points {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn render_points(points: &[ForecastPoint], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(points)
    } else {
        serde_json::to_string(points)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app_config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = app_config.storm_glass().to_stormglass_config();
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid StormGlass configuration")?;

    let client = StormGlassClient::new(config)?;

    match cli.command {
        Commands::Points { lat, lng, pretty } => {
            let points = client.fetch_points(lat, lng).await?;
            info!(count = points.len(), "Fetched forecast points");
            println!("{}", render_points(&points, pretty)?);
        },
    }

    Ok(())
}
