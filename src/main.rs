use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use sentiment_rs::config::{Config, LoggingConfig};
use sentiment_rs::pipeline;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Train a sentiment classifier, predict test rows, and score the result
#[derive(Parser, Debug)]
#[command(name = "sentiment-rs", version, about)]
struct Cli {
    /// Labeled training data (CSV)
    train_file: PathBuf,
    /// Unlabeled test data (CSV)
    test_file: PathBuf,
    /// Ground-truth labels for the test data (CSV)
    ground_truth_file: PathBuf,
    /// Prefix for the generated results and accuracy files
    output_prefix: String,
}

fn init_logging(config: &LoggingConfig) {
    let level = Level::from_str(&config.level).unwrap_or(Level::INFO);

    if config.format == "pretty" {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)
    }
    .expect("Failed to set tracing subscriber");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    init_logging(&config.logging);

    info!("Starting sentiment-rs");
    info!("  Training file: {}", cli.train_file.display());
    info!("  Test file: {}", cli.test_file.display());
    info!("  Ground-truth file: {}", cli.ground_truth_file.display());
    info!("  Output prefix: {}", cli.output_prefix);

    match pipeline::run(
        &cli.train_file,
        &cli.test_file,
        &cli.ground_truth_file,
        &cli.output_prefix,
        &config.output,
    ) {
        Ok(result) => {
            info!(
                accuracy = result.accuracy,
                mismatches = result.mismatches.len(),
                "Pipeline complete"
            );
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {e}");
            Err(e.into())
        }
    }
}
