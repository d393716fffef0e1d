use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use folio_core::portfolio::{Portfolio, PortfolioRepositoryTrait};
use folio_core::Result;

use super::model::PortfolioDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolios;

pub struct PortfolioRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        PortfolioRepository { pool, writer }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    fn latest_for_user(&self, user_id: &str) -> Result<Option<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let row = portfolios::table
            .filter(portfolios::user_id.eq(user_id))
            .order(portfolios::created_at.desc())
            .first::<PortfolioDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(PortfolioDB::into_domain).transpose()
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolios::table
            .filter(portfolios::user_id.eq(user_id))
            .order(portfolios::created_at.desc())
            .load::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(PortfolioDB::into_domain).collect()
    }

    fn find_owned(&self, user_id: &str, portfolio_id: &str) -> Result<Option<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let row = portfolios::table
            .filter(
                portfolios::id
                    .eq(portfolio_id)
                    .and(portfolios::user_id.eq(user_id)),
            )
            .first::<PortfolioDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(PortfolioDB::into_domain).transpose()
    }

    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio> {
        let row = PortfolioDB::from_domain(&portfolio)?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Portfolio> {
                let inserted = diesel::insert_into(portfolios::table)
                    .values(&row)
                    .returning(PortfolioDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                inserted.into_domain()
            })
            .await
    }

    async fn update_owned(&self, portfolio: Portfolio) -> Result<Option<Portfolio>> {
        let row = PortfolioDB::from_domain(&portfolio)?;
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Option<Portfolio>> {
                    let target = portfolios::table.filter(
                        portfolios::id
                            .eq(row.id.clone())
                            .and(portfolios::user_id.eq(row.user_id.clone())),
                    );
                    let affected = diesel::update(target)
                        .set(&row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Ok(None);
                    }
                    let updated = portfolios::table
                        .find(row.id.clone())
                        .first::<PortfolioDB>(conn)
                        .map_err(StorageError::from)?;
                    updated.into_domain().map(Some)
                },
            )
            .await
    }

    async fn delete_owned(&self, user_id: &str, portfolio_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let portfolio_id = portfolio_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let target = portfolios::table.filter(
                    portfolios::id
                        .eq(portfolio_id)
                        .and(portfolios::user_id.eq(user_id)),
                );
                Ok(diesel::delete(target)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
