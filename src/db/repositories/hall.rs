use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::db::common::{ found, non_empty, Repository };
use crate::db::context::DbContext;
use crate::db::error::RepositoryResult;
use crate::models::Hall;

/// Hall storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HallRepository: Send + Sync {
    async fn create(&self, ctx: &DbContext, hall: &mut Hall) -> RepositoryResult<()>;

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Hall>;

    async fn get_by_number(&self, ctx: &DbContext, number: i64) -> RepositoryResult<Hall>;

    /// Every hall keyed by hall id; no halls at all is reported as a missing entity
    async fn get_all(&self, ctx: &DbContext) -> RepositoryResult<HashMap<i64, Hall>>;
}

/// Repository for hall database operations
#[derive(Clone)]
pub struct PgHallRepository {
    pool: PgPool,
}

impl PgHallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Repository for PgHallRepository {
    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl HallRepository for PgHallRepository {
    async fn create(&self, ctx: &DbContext, hall: &mut Hall) -> RepositoryResult<()> {
        let (id,): (i64,) = ctx
            .tr_or_db(self.pool()).await
            .fetch_one(
                sqlx::query_as("insert into halls(number) values($1) returning hall_id;").bind(hall.number)
            ).await?;

        hall.id = id;
        Ok(())
    }

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Hall> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from halls where hall_id=$1;").bind(id)).await?;

        found(row)
    }

    async fn get_by_number(&self, ctx: &DbContext, number: i64) -> RepositoryResult<Hall> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from halls where number=$1;").bind(number)).await?;

        found(row)
    }

    async fn get_all(&self, ctx: &DbContext) -> RepositoryResult<HashMap<i64, Hall>> {
        let rows: Vec<Hall> = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(sqlx::query_as("select * from halls;")).await?;

        Ok(index_by_id(non_empty(rows)?))
    }
}

fn index_by_id(halls: Vec<Hall>) -> HashMap<i64, Hall> {
    halls
        .into_iter()
        .map(|hall| (hall.id, hall))
        .collect()
}
