use crate::errors::Result;
use crate::returns::returns_model::{MonthlyReturn, NewMonthlyReturn, ReturnsSummary};
use async_trait::async_trait;

/// Trait for monthly-return repository operations, all user-scoped.
#[async_trait]
pub trait ReturnsRepositoryTrait: Send + Sync {
    /// Most recent `limit` rows, ordered year then month descending.
    fn recent_for_user(&self, user_id: &str, limit: i64) -> Result<Vec<MonthlyReturn>>;
    /// All rows for the user, ordered year then month descending.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<MonthlyReturn>>;
    fn find_owned(&self, user_id: &str, record_id: &str) -> Result<Option<MonthlyReturn>>;
    async fn insert(&self, record: MonthlyReturn) -> Result<MonthlyReturn>;
    async fn update_owned(&self, record: MonthlyReturn) -> Result<Option<MonthlyReturn>>;
}

/// Trait for monthly-return service operations.
#[async_trait]
pub trait ReturnsServiceTrait: Send + Sync {
    /// Last `months` rows in chronological order (oldest first).
    fn get_recent(&self, user_id: &str, months: i64) -> Result<Vec<MonthlyReturn>>;
    async fn create(&self, user_id: &str, input: NewMonthlyReturn) -> Result<MonthlyReturn>;
    async fn update(
        &self,
        user_id: &str,
        record_id: &str,
        input: NewMonthlyReturn,
    ) -> Result<MonthlyReturn>;
    fn summary(&self, user_id: &str) -> Result<ReturnsSummary>;
}
