use crate::errors::Result;
use crate::portfolio::portfolio_model::{Portfolio, PortfolioInput};
use async_trait::async_trait;

/// Trait for portfolio repository operations.
///
/// Every operation is scoped to an owning user: queries filter on the
/// caller's id so a foreign snapshot id behaves exactly like a missing one.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    fn latest_for_user(&self, user_id: &str) -> Result<Option<Portfolio>>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Portfolio>>;
    fn find_owned(&self, user_id: &str, portfolio_id: &str) -> Result<Option<Portfolio>>;
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio>;
    async fn update_owned(&self, portfolio: Portfolio) -> Result<Option<Portfolio>>;
    async fn delete_owned(&self, user_id: &str, portfolio_id: &str) -> Result<usize>;
}

/// Trait for portfolio service operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Latest snapshot for the caller; NotFound when none exists.
    fn get_current(&self, user_id: &str) -> Result<Portfolio>;
    /// All snapshots for the caller, most recent first.
    fn get_history(&self, user_id: &str) -> Result<Vec<Portfolio>>;
    async fn create(&self, user_id: &str, input: PortfolioInput) -> Result<Portfolio>;
    async fn update(
        &self,
        user_id: &str,
        portfolio_id: &str,
        input: PortfolioInput,
    ) -> Result<Portfolio>;
    async fn delete(&self, user_id: &str, portfolio_id: &str) -> Result<()>;
}
