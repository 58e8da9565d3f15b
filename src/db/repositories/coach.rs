use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::common::{ found, non_empty, Repository };
use crate::db::context::DbContext;
use crate::db::error::RepositoryResult;
use crate::models::Coach;

/// Coach storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoachRepository: Send + Sync {
    async fn create(&self, ctx: &DbContext, coach: &mut Coach) -> RepositoryResult<()>;

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Coach>;

    async fn get_by_name(&self, ctx: &DbContext, name: &str) -> RepositoryResult<Coach>;

    /// Every coach; no coaches at all is reported as a missing entity
    async fn get_all(&self, ctx: &DbContext) -> RepositoryResult<Vec<Coach>>;
}

/// Repository for coach database operations
#[derive(Clone)]
pub struct PgCoachRepository {
    pool: PgPool,
}

impl PgCoachRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Repository for PgCoachRepository {
    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CoachRepository for PgCoachRepository {
    async fn create(&self, ctx: &DbContext, coach: &mut Coach) -> RepositoryResult<()> {
        let (id,): (i64,) = ctx
            .tr_or_db(self.pool()).await
            .fetch_one(
                sqlx::query_as("insert into coaches(name) values($1) returning coach_id;").bind(&coach.name)
            ).await?;

        coach.id = id;
        Ok(())
    }

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Coach> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from coaches where coach_id = $1;").bind(id)).await?;

        found(row)
    }

    async fn get_by_name(&self, ctx: &DbContext, name: &str) -> RepositoryResult<Coach> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from coaches where name = $1;").bind(name)).await?;

        found(row)
    }

    async fn get_all(&self, ctx: &DbContext) -> RepositoryResult<Vec<Coach>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(sqlx::query_as("select * from coaches order by coach_id;")).await?;

        non_empty(rows)
    }
}
