use std::fs;
use std::path::PathBuf;

use polars::prelude::*;

use crate::error::PipelineError;
use crate::loader::{load_customers, parse_customers};
use crate::schema;
use crate::transform::derive_indicators;

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn projects_fixture_to_selected_columns() {
    let content = fixture("BankChurners.csv");
    let df = parse_customers(&content).expect("fixture parse failed");

    assert_eq!(df.get_column_names(), schema::selected_column_names());
    assert_eq!(df.height(), 8);

    // source columns outside the selection do not survive projection
    assert!(df.column("CLIENTNUM").is_err());
    assert!(df.column("Months_on_book").is_err());

    assert_eq!(df.column("Credit_Limit").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Customer_Age").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("Attrition_Flag").unwrap().dtype(), &DataType::String);
}

#[test]
fn preserves_row_order_from_source() {
    let content = fixture("BankChurners.csv");
    let df = parse_customers(&content).expect("fixture parse failed");

    let ages: Vec<Option<i64>> = df
        .column("Customer_Age")
        .expect("Customer_Age column missing")
        .i64()
        .expect("Customer_Age not Int64")
        .into_iter()
        .collect();
    let expected: Vec<Option<i64>> = [45, 49, 51, 40, 40, 44, 51, 32]
        .into_iter()
        .map(Some)
        .collect();
    assert_eq!(ages, expected);
}

#[test]
fn missing_required_column_is_fatal() {
    let content = "Attrition_Flag,Customer_Age,Gender,Dependent_count,Education_Level,Marital_Status,Income_Category,Card_Category\n\
                   Existing Customer,45,M,3,High School,Married,$60K - $80K,Blue\n";
    let err = parse_customers(content).expect_err("parse should fail");
    assert!(matches!(
        err,
        PipelineError::MissingColumn {
            column: "Credit_Limit"
        }
    ));
}

#[test]
fn unparseable_credit_limit_is_fatal() {
    let content = "Attrition_Flag,Customer_Age,Gender,Dependent_count,Education_Level,Marital_Status,Income_Category,Card_Category,Credit_Limit\n\
                   Existing Customer,45,M,3,High School,Married,$60K - $80K,Blue,twelve\n";
    let err = parse_customers(content).expect_err("parse should fail");
    assert!(matches!(
        err,
        PipelineError::DataRow {
            line: 2,
            column: "Credit_Limit",
            ..
        }
    ));
}

#[test]
fn missing_input_file_is_fatal() {
    let err = load_customers("does_not_exist/BankChurners.csv").expect_err("load should fail");
    assert!(matches!(err, PipelineError::Io(_)));
}

#[test]
fn derives_indicators_for_threshold_and_label() {
    let content = "Attrition_Flag,Customer_Age,Gender,Dependent_count,Education_Level,Marital_Status,Income_Category,Card_Category,Credit_Limit\n\
                   Existing Customer,45,M,3,High School,Married,$60K - $80K,Blue,25000.0\n\
                   Attrited Customer,49,F,5,Graduate,Single,Less than $40K,Blue,15000.0\n\
                   Existing Customer,51,M,3,Graduate,Married,$80K - $120K,Blue,20000.0\n\
                   Attrited Customer,40,F,4,High School,Unknown,Less than $40K,Blue,20000.5\n\
                   Attrited Customer,44,M,2,Graduate,Married,$40K - $60K,Blue,\n";
    let mut df = parse_customers(content).expect("parse failed");
    derive_indicators(&mut df).expect("derivation failed");

    let high_limit: Vec<Option<i32>> = df
        .column(schema::HIGH_LIMIT)
        .expect("High_limit column missing")
        .i32()
        .expect("High_limit not Int32")
        .into_iter()
        .collect();
    let churn: Vec<Option<i32>> = df
        .column(schema::CHURN)
        .expect("Churn column missing")
        .i32()
        .expect("Churn not Int32")
        .into_iter()
        .collect();

    // 20000.0 sits on the threshold and is not high-limit; the empty cell
    // loads as null and is not high-limit either
    assert_eq!(
        high_limit,
        vec![Some(1), Some(0), Some(0), Some(1), Some(0)]
    );
    assert_eq!(churn, vec![Some(0), Some(1), Some(0), Some(1), Some(1)]);

    let limits = df
        .column(schema::CREDIT_LIMIT)
        .expect("Credit_Limit column missing")
        .f64()
        .expect("Credit_Limit not Float64");
    assert!(limits.get(4).is_none());
}

#[test]
fn derivation_appends_exactly_two_columns() {
    let content = fixture("BankChurners.csv");
    let mut df = parse_customers(&content).expect("fixture parse failed");
    let height = df.height();

    derive_indicators(&mut df).expect("derivation failed");

    let mut expected = schema::selected_column_names();
    expected.push(schema::HIGH_LIMIT);
    expected.push(schema::CHURN);
    assert_eq!(df.get_column_names(), expected);
    assert_eq!(df.height(), height);
}
