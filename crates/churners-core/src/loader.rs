use std::fs;
use std::path::Path;

use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::schema::{CellType, SelectedColumn, SELECTED_COLUMNS};

/// Read the raw export from disk and project it down to the analysis columns.
pub fn load_customers(path: impl AsRef<Path>) -> Result<DataFrame> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_customers(&content)
}

/// Parse CSV content and keep only [`SELECTED_COLUMNS`], in that order.
///
/// Row order is preserved. Every selected column must be present in the
/// header; numeric cells that fail to parse abort the load.
pub fn parse_customers(content: &str) -> Result<DataFrame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let mut selected = Vec::with_capacity(SELECTED_COLUMNS.len());
    for column in SELECTED_COLUMNS {
        let position = headers
            .iter()
            .position(|name| name == column.name)
            .ok_or(PipelineError::MissingColumn {
                column: column.name,
            })?;
        selected.push((column, position, ColumnBuffer::new(column.cell_type)));
    }

    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = row_idx + 2; // 1-indexed, accounting for the header row
        for (column, position, buffer) in selected.iter_mut() {
            let value = record.get(*position).unwrap_or("");
            buffer.push(value, line, column.name)?;
        }
    }

    let columns: Vec<Column> = selected
        .into_iter()
        .map(|(column, _, buffer)| buffer.into_series(column.name).into())
        .collect();
    Ok(DataFrame::new(columns)?)
}

enum ColumnBuffer {
    Utf8(Vec<Option<String>>),
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
}

impl ColumnBuffer {
    fn new(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Utf8 => ColumnBuffer::Utf8(Vec::new()),
            CellType::Int => ColumnBuffer::Int(Vec::new()),
            CellType::Float => ColumnBuffer::Float(Vec::new()),
        }
    }

    fn push(&mut self, value: &str, line: usize, column: &'static str) -> Result<()> {
        match self {
            ColumnBuffer::Utf8(values) => values.push(clean_optional(value)),
            ColumnBuffer::Int(values) => values.push(parse_optional_i64(value, line, column)?),
            ColumnBuffer::Float(values) => values.push(parse_optional_f64(value, line, column)?),
        }
        Ok(())
    }

    fn into_series(self, name: &'static str) -> Series {
        match self {
            ColumnBuffer::Utf8(values) => Series::new(name.into(), values),
            ColumnBuffer::Int(values) => Series::new(name.into(), values),
            ColumnBuffer::Float(values) => Series::new(name.into(), values),
        }
    }
}

fn clean_optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_optional_i64(value: &str, line: usize, column: &'static str) -> Result<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|err| PipelineError::DataRow {
            line,
            column,
            message: format!("failed to parse '{trimmed}' as integer: {err}"),
        })
}

fn parse_optional_f64(value: &str, line: usize, column: &'static str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|err| PipelineError::DataRow {
            line,
            column,
            message: format!("failed to parse '{trimmed}' as float: {err}"),
        })
}
