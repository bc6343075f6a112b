use std::path::Path;

use polars::prelude::{ChunkAgg, DataFrame};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::schema;
use crate::{loader, outputs, transform};

/// Row counts reported after a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows: usize,
    pub high_limit_customers: usize,
    pub churned_customers: usize,
}

/// Load the raw export, derive the indicator columns, and write the labeled
/// table to `output`.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary> {
    info!(input = %input.display(), "loading customer table");
    let mut df = loader::load_customers(input)?;
    debug!(rows = df.height(), columns = df.width(), "customer table loaded");

    transform::derive_indicators(&mut df)?;

    let summary = RunSummary {
        rows: df.height(),
        high_limit_customers: count_flagged(&df, schema::HIGH_LIMIT)?,
        churned_customers: count_flagged(&df, schema::CHURN)?,
    };

    outputs::attach_customer_identifier(&mut df)?;
    outputs::write_output(&mut df, output)?;
    info!(output = %output.display(), rows = summary.rows, "derived table written");

    Ok(summary)
}

fn count_flagged(df: &DataFrame, column: &str) -> Result<usize> {
    let flags = df.column(column)?.i32()?;
    Ok(flags.sum().unwrap_or(0) as usize)
}
