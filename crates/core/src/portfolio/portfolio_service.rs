use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DatabaseError, Error, Result};

use super::aggregator::aggregate;
use super::portfolio_model::{Portfolio, PortfolioInput};
use super::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};

pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        PortfolioService { repository }
    }
}

fn not_found(portfolio_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Portfolio {portfolio_id} not found"
    )))
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn get_current(&self, user_id: &str) -> Result<Portfolio> {
        self.repository.latest_for_user(user_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound("No portfolio found".to_string()))
        })
    }

    fn get_history(&self, user_id: &str) -> Result<Vec<Portfolio>> {
        self.repository.list_for_user(user_id)
    }

    async fn create(&self, user_id: &str, input: PortfolioInput) -> Result<Portfolio> {
        let now = Utc::now().naive_utc();
        let mut portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            equity: input.equity,
            non_equity: input.non_equity,
            emergency: input.emergency,
            grand_total: 0.0,
            invested: 0.0,
            current_value: 0.0,
            created_at: now,
            updated_at: now,
        };
        aggregate(&mut portfolio);
        log::debug!(
            "Creating portfolio snapshot for user {user_id} (grand total {})",
            portfolio.grand_total
        );
        self.repository.insert(portfolio).await
    }

    async fn update(
        &self,
        user_id: &str,
        portfolio_id: &str,
        input: PortfolioInput,
    ) -> Result<Portfolio> {
        // Ownership check up front; a foreign id looks identical to a
        // missing one.
        let existing = self
            .repository
            .find_owned(user_id, portfolio_id)?
            .ok_or_else(|| not_found(portfolio_id))?;

        let mut portfolio = Portfolio {
            equity: input.equity,
            non_equity: input.non_equity,
            emergency: input.emergency,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        aggregate(&mut portfolio);
        self.repository
            .update_owned(portfolio)
            .await?
            .ok_or_else(|| not_found(portfolio_id))
    }

    async fn delete(&self, user_id: &str, portfolio_id: &str) -> Result<()> {
        let deleted = self.repository.delete_owned(user_id, portfolio_id).await?;
        if deleted == 0 {
            return Err(not_found(portfolio_id));
        }
        Ok(())
    }
}
