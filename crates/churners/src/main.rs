use std::path::PathBuf;

use anyhow::{Context, Result};
use churners_core::pipeline;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "BankChurners preprocessing pipeline", long_about = None)]
struct Cli {
    /// Raw customer export to load
    #[arg(long, default_value = "BankChurners.csv")]
    input: PathBuf,

    /// Where to write the derived table
    #[arg(long, default_value = "bank_churners_show_why.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();

    let summary = pipeline::run(&cli.input, &cli.output)
        .with_context(|| format!("failed to preprocess '{}'", cli.input.display()))?;

    let summary_json =
        serde_json::to_string(&summary).context("failed to encode run summary")?;
    info!(summary = %summary_json, "preprocessing complete");
    Ok(())
}
