//! Database models for monthly returns.
//!
//! The per-category amounts are flattened into columns; `returns_total`
//! holds the category sum the client reports alongside the snapshot-level
//! `total_returns`.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use folio_core::returns::{CategoryReturns, MonthlyReturn};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_returns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyReturnDB {
    pub id: String,
    pub user_id: String,
    pub year: i32,
    pub month: i32,
    pub stocks: f64,
    pub mutual_funds: f64,
    pub commodities: f64,
    pub bonds: f64,
    pub returns_total: f64,
    pub invested: f64,
    pub current_value: f64,
    pub total_returns: f64,
    pub returns_percentage: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MonthlyReturnDB> for MonthlyReturn {
    fn from(db: MonthlyReturnDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            year: db.year,
            month: db.month,
            returns: CategoryReturns {
                stocks: db.stocks,
                mutual_funds: db.mutual_funds,
                commodities: db.commodities,
                bonds: db.bonds,
                total: db.returns_total,
            },
            invested: db.invested,
            current_value: db.current_value,
            total_returns: db.total_returns,
            returns_percentage: db.returns_percentage,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<MonthlyReturn> for MonthlyReturnDB {
    fn from(record: MonthlyReturn) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            year: record.year,
            month: record.month,
            stocks: record.returns.stocks,
            mutual_funds: record.returns.mutual_funds,
            commodities: record.returns.commodities,
            bonds: record.returns.bonds,
            returns_total: record.returns.total,
            invested: record.invested,
            current_value: record.current_value,
            total_returns: record.total_returns,
            returns_percentage: record.returns_percentage,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
