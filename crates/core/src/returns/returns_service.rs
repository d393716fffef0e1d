use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DatabaseError, Error, Result, ValidationError};

use super::returns_model::{MonthlyReturn, NewMonthlyReturn, ReturnsSummary, SummaryByCategory};
use super::returns_traits::{ReturnsRepositoryTrait, ReturnsServiceTrait};

pub struct ReturnsService {
    repository: Arc<dyn ReturnsRepositoryTrait>,
}

impl ReturnsService {
    pub fn new(repository: Arc<dyn ReturnsRepositoryTrait>) -> Self {
        ReturnsService { repository }
    }
}

fn validate_month(month: i32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Month must be between 1 and 12, got {month}"
        ))));
    }
    Ok(())
}

fn not_found(record_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Monthly return {record_id} not found"
    )))
}

/// Rewords raw unique-index violations so the API surfaces a clean
/// conflict message instead of SQLite internals.
fn map_duplicate_period(err: Error) -> Error {
    match err {
        Error::Database(DatabaseError::UniqueViolation(_)) => Error::Database(
            DatabaseError::UniqueViolation(
                "A monthly return for this period already exists".to_string(),
            ),
        ),
        other => other,
    }
}

#[async_trait]
impl ReturnsServiceTrait for ReturnsService {
    fn get_recent(&self, user_id: &str, months: i64) -> Result<Vec<MonthlyReturn>> {
        let mut rows = self.repository.recent_for_user(user_id, months.max(0))?;
        // Stored newest-first; the dashboard charts oldest-first.
        rows.reverse();
        Ok(rows)
    }

    async fn create(&self, user_id: &str, input: NewMonthlyReturn) -> Result<MonthlyReturn> {
        validate_month(input.month)?;
        let now = Utc::now().naive_utc();
        let record = MonthlyReturn {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            year: input.year,
            month: input.month,
            returns: input.returns,
            invested: input.invested,
            current_value: input.current_value,
            total_returns: input.total_returns,
            returns_percentage: input.returns_percentage,
            created_at: now,
            updated_at: now,
        };
        self.repository
            .insert(record)
            .await
            .map_err(map_duplicate_period)
    }

    async fn update(
        &self,
        user_id: &str,
        record_id: &str,
        input: NewMonthlyReturn,
    ) -> Result<MonthlyReturn> {
        validate_month(input.month)?;
        let existing = self
            .repository
            .find_owned(user_id, record_id)?
            .ok_or_else(|| not_found(record_id))?;

        let record = MonthlyReturn {
            year: input.year,
            month: input.month,
            returns: input.returns,
            invested: input.invested,
            current_value: input.current_value,
            total_returns: input.total_returns,
            returns_percentage: input.returns_percentage,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository
            .update_owned(record)
            .await
            .map_err(map_duplicate_period)?
            .ok_or_else(|| not_found(record_id))
    }

    fn summary(&self, user_id: &str) -> Result<ReturnsSummary> {
        let rows = self.repository.list_for_user(user_id)?;

        let mut total_returns = 0.0;
        let mut by_category = SummaryByCategory::default();
        for row in &rows {
            total_returns += row.total_returns;
            by_category.stocks += row.returns.stocks;
            by_category.mutual_funds += row.returns.mutual_funds;
            by_category.commodities += row.returns.commodities;
            by_category.bonds += row.returns.bonds;
        }

        Ok(ReturnsSummary {
            total_returns,
            by_category,
            monthly_data: rows,
        })
    }
}
