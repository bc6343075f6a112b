use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;
use crate::schema;

/// Label each row with its position in the source file.
pub fn attach_customer_identifier(df: &mut DataFrame) -> Result<()> {
    let ids: Vec<i64> = (0..df.height() as i64).collect();
    df.insert_column(0, Series::new(schema::CUSTOMER_IDENTIFIER.into(), ids))?;
    Ok(())
}

/// Serialize the derived table as comma-separated text with a header row,
/// creating or overwriting `path`. The write is direct; a crash mid-write
/// leaves a partial file.
pub fn write_output(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}
