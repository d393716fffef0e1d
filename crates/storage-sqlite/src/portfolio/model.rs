//! Database models for portfolio snapshots.
//!
//! The three nested categories are persisted as JSON documents in text
//! columns; the derived roll-ups get real columns so listing and ordering
//! never parse JSON.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use folio_core::portfolio::Portfolio;
use folio_core::{Error, Result};

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioDB {
    pub id: String,
    pub user_id: String,
    pub equity: String,
    pub non_equity: String,
    pub emergency: String,
    pub grand_total: f64,
    pub invested: f64,
    pub current_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn corrupt_document(id: &str, err: serde_json::Error) -> Error {
    StorageError::SerializationError(format!("Corrupt portfolio document {id}: {err}")).into()
}

impl PortfolioDB {
    pub fn into_domain(self) -> Result<Portfolio> {
        Ok(Portfolio {
            equity: serde_json::from_str(&self.equity)
                .map_err(|e| corrupt_document(&self.id, e))?,
            non_equity: serde_json::from_str(&self.non_equity)
                .map_err(|e| corrupt_document(&self.id, e))?,
            emergency: serde_json::from_str(&self.emergency)
                .map_err(|e| corrupt_document(&self.id, e))?,
            id: self.id,
            user_id: self.user_id,
            grand_total: self.grand_total,
            invested: self.invested,
            current_value: self.current_value,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    pub fn from_domain(portfolio: &Portfolio) -> Result<Self> {
        Ok(Self {
            id: portfolio.id.clone(),
            user_id: portfolio.user_id.clone(),
            equity: serde_json::to_string(&portfolio.equity)?,
            non_equity: serde_json::to_string(&portfolio.non_equity)?,
            emergency: serde_json::to_string(&portfolio.emergency)?,
            grand_total: portfolio.grand_total,
            invested: portfolio.invested,
            current_value: portfolio.current_value,
            created_at: portfolio.created_at,
            updated_at: portfolio.updated_at,
        })
    }
}
