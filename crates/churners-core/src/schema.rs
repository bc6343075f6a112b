#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Utf8,
    Int,
    Float,
}

#[derive(Debug, Clone, Copy)]
pub struct SelectedColumn {
    pub name: &'static str,
    pub cell_type: CellType,
}

/// The analysis columns kept from the raw export, in output order.
pub const SELECTED_COLUMNS: [SelectedColumn; 9] = [
    SelectedColumn {
        name: "Attrition_Flag",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Customer_Age",
        cell_type: CellType::Int,
    },
    SelectedColumn {
        name: "Gender",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Dependent_count",
        cell_type: CellType::Int,
    },
    SelectedColumn {
        name: "Education_Level",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Marital_Status",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Income_Category",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Card_Category",
        cell_type: CellType::Utf8,
    },
    SelectedColumn {
        name: "Credit_Limit",
        cell_type: CellType::Float,
    },
];

pub const ATTRITION_FLAG: &str = "Attrition_Flag";
pub const CREDIT_LIMIT: &str = "Credit_Limit";

pub const HIGH_LIMIT: &str = "High_limit";
pub const CHURN: &str = "Churn";
pub const CUSTOMER_IDENTIFIER: &str = "customer_identifier";

/// A customer counts as high-limit strictly above this credit limit.
pub const HIGH_LIMIT_THRESHOLD: f64 = 20_000.0;

/// Label the upstream export uses for customers who closed their account.
pub const ATTRITED_LABEL: &str = "Attrited Customer";

pub fn selected_column_names() -> Vec<&'static str> {
    SELECTED_COLUMNS.iter().map(|column| column.name).collect()
}
