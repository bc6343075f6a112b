use polars::prelude::*;

use crate::error::Result;
use crate::schema;

/// Append the `High_limit` and `Churn` indicator columns in place.
///
/// `High_limit` is 1 for credit limits strictly above
/// [`schema::HIGH_LIMIT_THRESHOLD`]; `Churn` is 1 for rows labeled
/// [`schema::ATTRITED_LABEL`]. Null cells produce 0.
pub fn derive_indicators(df: &mut DataFrame) -> Result<()> {
    let len = df.height();

    let credit_limit = df.column(schema::CREDIT_LIMIT)?.f64()?;
    let mut high_limit: Vec<i32> = Vec::with_capacity(len);
    for value in credit_limit.into_iter() {
        let flag = matches!(value, Some(limit) if limit > schema::HIGH_LIMIT_THRESHOLD);
        high_limit.push(flag as i32);
    }

    let attrition = df.column(schema::ATTRITION_FLAG)?.str()?;
    let mut churn: Vec<i32> = Vec::with_capacity(len);
    for value in attrition.into_iter() {
        churn.push((value == Some(schema::ATTRITED_LABEL)) as i32);
    }

    df.with_column(Series::new(schema::HIGH_LIMIT.into(), high_limit))?;
    df.with_column(Series::new(schema::CHURN.into(), churn))?;
    Ok(())
}
