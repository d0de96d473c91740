//! Ridecast - Main Entry Point
//!
//! Batch CLI for the hourly taxi-demand forecasting workflows.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ridecast_core::types::{FeatureView, PickupHour};
use ridecast_features::synthetic::{SyntheticConfig, SyntheticDemand};
use ridecast_pipeline::config::AppConfig;
use ridecast_pipeline::inference::run_inference;
use ridecast_pipeline::training::{run_training, TrainingOutcome};
use ridecast_store::{LocalFeatureStore, LocalModelRegistry};

/// Ridecast demand forecasting
#[derive(Parser, Debug)]
#[command(name = "ridecast")]
#[command(version = "0.1.0")]
#[command(about = "Hourly taxi-demand forecasting workflows", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "ridecast.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fit a candidate model and register it if it beats the incumbent
    Train,
    /// Predict next-hour demand and publish to the predictions group
    Infer,
    /// Seed the feature store with synthetic demand history
    Seed {
        /// Days of history to generate
        #[arg(long, default_value = "60")]
        days: i64,
        /// Number of pickup locations
        #[arg(long, default_value = "10")]
        locations: u32,
        /// Generator seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = if std::path::Path::new(&args.config).exists() {
        AppConfig::load(&args.config)?
    } else {
        tracing::warn!("Config file {} not found, using defaults", args.config);
        AppConfig::default()
    };

    let store = LocalFeatureStore::open(&config.store_dir)?;
    let registry = LocalModelRegistry::open(&config.registry_dir)?;
    let now = chrono::Utc::now();

    match args.command {
        Command::Train => match run_training(&store, &registry, &config, now) {
            Ok(TrainingOutcome::Registered { version, mae, .. }) => {
                tracing::info!(
                    "Training complete: {} v{} registered with MAE {:.4}",
                    config.model_name,
                    version,
                    mae
                );
            }
            Ok(TrainingOutcome::Skipped { mae, previous_mae }) => {
                tracing::info!(
                    "Training complete: MAE {:.4} kept incumbent at {:.4}",
                    mae,
                    previous_mae
                );
            }
            Err(e) => {
                tracing::error!("Training failed, nothing registered: {e}");
                std::process::exit(1);
            }
        },
        Command::Infer => {
            let rows = run_inference(&store, &registry, &config, now)?;
            tracing::info!("Inference complete: {} locations predicted", rows.len());
        }
        Command::Seed {
            days,
            locations,
            seed,
        } => {
            let hours = days * 24;
            let synth = SyntheticConfig {
                num_locations: locations,
                start_hour: PickupHour::floor_from(now).sub_hours(hours),
                ..Default::default()
            };
            let records = SyntheticDemand::with_seed(synth, seed)
                .generate(usize::try_from(hours).unwrap_or(0));

            let view: FeatureView = config.feature_view.view();
            store.insert_series(&view, &records)?;
            tracing::info!(
                "Seeded {} rows ({} days x {} locations) into {}",
                records.len(),
                days,
                locations,
                view
            );
        }
    }

    Ok(())
}
