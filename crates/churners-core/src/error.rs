// crates/churners-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("input is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("data line {line} column '{column}' invalid: {message}")]
    DataRow {
        line: usize,
        column: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
