use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use folio_core::returns::{MonthlyReturn, ReturnsRepositoryTrait};
use folio_core::Result;

use super::model::MonthlyReturnDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::monthly_returns;

pub struct ReturnsRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ReturnsRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ReturnsRepository { pool, writer }
    }
}

#[async_trait]
impl ReturnsRepositoryTrait for ReturnsRepository {
    fn recent_for_user(&self, user_id: &str, limit: i64) -> Result<Vec<MonthlyReturn>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = monthly_returns::table
            .filter(monthly_returns::user_id.eq(user_id))
            .order((monthly_returns::year.desc(), monthly_returns::month.desc()))
            .limit(limit)
            .load::<MonthlyReturnDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(MonthlyReturn::from).collect())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<MonthlyReturn>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = monthly_returns::table
            .filter(monthly_returns::user_id.eq(user_id))
            .order((monthly_returns::year.desc(), monthly_returns::month.desc()))
            .load::<MonthlyReturnDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(MonthlyReturn::from).collect())
    }

    fn find_owned(&self, user_id: &str, record_id: &str) -> Result<Option<MonthlyReturn>> {
        let mut conn = get_connection(&self.pool)?;
        let row = monthly_returns::table
            .filter(
                monthly_returns::id
                    .eq(record_id)
                    .and(monthly_returns::user_id.eq(user_id)),
            )
            .first::<MonthlyReturnDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(MonthlyReturn::from))
    }

    async fn insert(&self, record: MonthlyReturn) -> Result<MonthlyReturn> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<MonthlyReturn> {
                    let row: MonthlyReturnDB = record.into();
                    let inserted = diesel::insert_into(monthly_returns::table)
                        .values(&row)
                        .returning(MonthlyReturnDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(MonthlyReturn::from(inserted))
                },
            )
            .await
    }

    async fn update_owned(&self, record: MonthlyReturn) -> Result<Option<MonthlyReturn>> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Option<MonthlyReturn>> {
                    let row: MonthlyReturnDB = record.into();
                    let target = monthly_returns::table.filter(
                        monthly_returns::id
                            .eq(row.id.clone())
                            .and(monthly_returns::user_id.eq(row.user_id.clone())),
                    );
                    let affected = diesel::update(target)
                        .set(&row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Ok(None);
                    }
                    let updated = monthly_returns::table
                        .find(row.id.clone())
                        .first::<MonthlyReturnDB>(conn)
                        .map_err(StorageError::from)?;
                    Ok(Some(MonthlyReturn::from(updated)))
                },
            )
            .await
    }
}
