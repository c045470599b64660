use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One budget line for a year. `year` stays a string, as the backend keys it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub line_items: Vec<Decimal>,
}
