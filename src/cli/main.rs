//! Command-line entry point.
//!
//! Resolves `<latitude> <longitude>` to a state/province name and prints a
//! single JSON line on stdout. Every outcome, including usage errors, is
//! reported that way with exit status 0. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use locstate::{locate, render, Config, PrimaryKey, ResolutionOutcome, Strategy};

#[derive(Parser, Debug)]
#[command(name = "locstate", version)]
#[command(about = "Resolve a coordinate to its enclosing state or province")]
struct Args {
    /// Latitude and longitude, in that order
    #[arg(value_name = "LAT LNG", allow_negative_numbers = true)]
    coordinates: Vec<String>,

    /// Resolution backend
    #[arg(short, long, value_enum, default_value_t = Strategy::Spatial)]
    strategy: Strategy,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// PostGIS connection URL
    #[arg(long, env = "LOCSTATE_DATABASE_URL")]
    database_url: Option<String>,

    /// Reverse geocoding endpoint
    #[arg(long, env = "LOCSTATE_GEOCODE_URL")]
    geocode_url: Option<String>,

    /// Geocoding API key
    #[arg(long, env = "LOCSTATE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output field carrying the region name
    #[arg(long, value_enum)]
    primary_key: Option<PrimaryKey>,

    /// Report the short name (e.g. "FL") from the geocoder
    #[arg(long)]
    short_name: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            init_logging(0)?;
            let message = e
                .to_string()
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            println!(
                "{}",
                render(&ResolutionOutcome::Failed(message), PrimaryKey::default())
            );
            return Ok(());
        }
    };

    init_logging(args.verbose)?;

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            let key = args.primary_key.unwrap_or_default();
            println!("{}", render(&ResolutionOutcome::Failed(e.to_string()), key));
            return Ok(());
        }
    };

    let outcome = locate(&args.coordinates, args.strategy, &config).await;
    println!("{}", render(&outcome, config.output.primary_key));

    Ok(())
}

/// File settings, overridden by flags and environment
fn load_config(args: &Args) -> Result<Config, locstate::ConfigError> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(url) = &args.database_url {
        config.database.url = url.clone();
    }
    if let Some(url) = &args.geocode_url {
        config.geocode.endpoint = url.clone();
    }
    if let Some(key) = &args.api_key {
        config.geocode.api_key = Some(key.clone());
    }
    if let Some(key) = args.primary_key {
        config.output.primary_key = key;
    }
    if args.short_name {
        config.geocode.short_name = true;
    }

    Ok(config)
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout is reserved for the JSON result
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
