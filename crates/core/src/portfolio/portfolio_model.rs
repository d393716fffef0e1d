//! Portfolio snapshot domain models.
//!
//! The wire format keeps the document shape the dashboard expects: three
//! categories (equity, non-equity, emergency fund) with nested holdings and
//! scalar invested/current pairs. Derived fields (`gain`, `gainPercentage`,
//! the category totals and the grand totals) are recomputed by
//! [`super::aggregate`] before every write and are never edited directly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single invested position with derived gain metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: String,
    #[serde(default)]
    pub invested: f64,
    #[serde(default)]
    pub current: f64,
    /// Derived: `current - invested`.
    #[serde(default)]
    pub gain: f64,
    /// Derived: `gain / invested * 100`, or 0 when invested <= 0.
    #[serde(default)]
    pub gain_percentage: f64,
    /// Classification for mutual funds (midcap, smallcap, flexicap, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub holding_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
}

/// An invested/current pair for scalar positions (cash, gold, silver).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountPair {
    #[serde(default)]
    pub invested: f64,
    #[serde(default)]
    pub current: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodities {
    #[serde(default)]
    pub gold: AmountPair,
    #[serde(default)]
    pub silver: AmountPair,
}

/// Equity category: direct stocks and mutual funds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equity {
    #[serde(default)]
    pub direct_stocks: Vec<Holding>,
    #[serde(default)]
    pub mutual_funds: Vec<Holding>,
    /// Derived: sum of current values across both lists.
    #[serde(default)]
    pub total: f64,
}

/// Non-equity category: cash, commodities, and fixed-income assets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonEquity {
    #[serde(default)]
    pub cash: AmountPair,
    #[serde(default)]
    pub commodities: Commodities,
    #[serde(default)]
    pub fixed_income_assets: Vec<Holding>,
    /// Derived: sum of current values across all positions.
    #[serde(default)]
    pub total: f64,
    /// Derived: sum of invested amounts across all positions.
    #[serde(default)]
    pub total_invested: f64,
}

/// An invested/current pair in the emergency fund's field naming.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyPair {
    #[serde(default)]
    pub invested_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
}

/// Emergency fund category: an invested bucket and a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFund {
    #[serde(default)]
    pub invested: EmergencyPair,
    #[serde(default)]
    pub bank_account: EmergencyPair,
    /// Derived: sum of current amounts.
    #[serde(default)]
    pub total: f64,
    /// Derived: sum of invested amounts.
    #[serde(default)]
    pub total_invested: f64,
}

/// A fully derived portfolio snapshot as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub equity: Equity,
    pub non_equity: NonEquity,
    pub emergency: EmergencyFund,
    /// Derived: sum of the three category totals.
    pub grand_total: f64,
    /// Derived: sum of the three category invested totals.
    pub invested: f64,
    /// Derived: equal to `grand_total`.
    pub current_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Leaf data submitted by the client when creating or updating a snapshot.
///
/// Any derived values present in the payload are ignored and recomputed;
/// missing leaves default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInput {
    #[serde(default)]
    pub equity: Equity,
    #[serde(default)]
    pub non_equity: NonEquity,
    #[serde(default)]
    pub emergency: EmergencyFund,
}
