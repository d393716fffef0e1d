//! Monthly return domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-category return amounts for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReturns {
    #[serde(default)]
    pub stocks: f64,
    #[serde(default)]
    pub mutual_funds: f64,
    #[serde(default)]
    pub commodities: f64,
    #[serde(default)]
    pub bonds: f64,
    #[serde(default)]
    pub total: f64,
}

/// One row per (user, year, month); the pair is unique per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReturn {
    pub id: String,
    pub user_id: String,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: i32,
    pub returns: CategoryReturns,
    pub invested: f64,
    pub current_value: f64,
    pub total_returns: f64,
    pub returns_percentage: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or replacing a monthly return.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyReturn {
    pub year: i32,
    pub month: i32,
    #[serde(default)]
    pub returns: CategoryReturns,
    #[serde(default)]
    pub invested: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub total_returns: f64,
    #[serde(default)]
    pub returns_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryByCategory {
    pub stocks: f64,
    pub mutual_funds: f64,
    pub commodities: f64,
    pub bonds: f64,
}

/// Aggregated totals across all of a user's monthly returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsSummary {
    pub total_returns: f64,
    pub by_category: SummaryByCategory,
    /// The full series, most recent first.
    pub monthly_data: Vec<MonthlyReturn>,
}
