use async_trait::async_trait;
use chrono::{ DateTime, NaiveDate, Utc };
use sqlx::PgPool;

use crate::db::common::{ found, non_empty, Repository };
use crate::db::context::DbContext;
use crate::db::error::{ RepositoryError, RepositoryResult };
use crate::models::Training;

/// Training storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    /// Insert the training with all places available and write the id back
    async fn create(&self, ctx: &DbContext, training: &mut Training) -> RepositoryResult<()>;

    async fn delete(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()>;

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Training>;

    /// Trainings the client is assigned to
    async fn get_all_by_client(&self, ctx: &DbContext, client_id: i64) -> RepositoryResult<Vec<Training>>;

    /// Trainings of one coach on a UTC calendar day
    async fn get_all_by_coach_on_date(
        &self,
        ctx: &DbContext,
        coach_id: i64,
        date: NaiveDate
    ) -> RepositoryResult<Vec<Training>>;

    /// Trainings starting exactly at `date_time`
    async fn get_all_by_date_time(
        &self,
        ctx: &DbContext,
        date_time: DateTime<Utc>
    ) -> RepositoryResult<Vec<Training>>;

    /// Trainings starting within `[from, to]`
    async fn get_all_between_date_time(
        &self,
        ctx: &DbContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>
    ) -> RepositoryResult<Vec<Training>>;

    /// Take one available place
    async fn reduce_available_places_num(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()>;

    /// Give one place back
    async fn increase_available_places_num(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()>;
}

/// Repository for training database operations
#[derive(Clone)]
pub struct PgTrainingRepository {
    pool: PgPool,
}

impl PgTrainingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a statement that returns the affected training id, if any
    async fn returning_id(
        &self,
        ctx: &DbContext,
        query: &'static str,
        id: i64
    ) -> RepositoryResult<()> {
        let affected: Option<(i64,)> = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as(query).bind(id)).await?;

        affected.map(|_| ()).ok_or(RepositoryError::EntityDoesNotExist)
    }
}

impl Repository for PgTrainingRepository {
    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TrainingRepository for PgTrainingRepository {
    async fn create(&self, ctx: &DbContext, training: &mut Training) -> RepositoryResult<()> {
        let (id, available): (i64, i32) = ctx
            .tr_or_db(self.pool()).await
            .fetch_one(
                sqlx
                    ::query_as(
                        "insert into trainings(coach_id, hall_id, name, date_time, places_num, available_places_num) values($1, $2, $3, $4, $5, $5) returning training_id, available_places_num;"
                    )
                    .bind(training.coach_id)
                    .bind(training.hall_id)
                    .bind(&training.name)
                    .bind(training.date_time)
                    .bind(training.places_num)
            ).await?;

        training.id = id;
        training.available_places_num = available;
        Ok(())
    }

    async fn delete(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()> {
        self.returning_id(ctx, "delete from trainings where training_id=$1 returning training_id;", id).await
    }

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Training> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from trainings where training_id=$1;").bind(id)).await?;

        found(row)
    }

    async fn get_all_by_client(&self, ctx: &DbContext, client_id: i64) -> RepositoryResult<Vec<Training>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(
                sqlx
                    ::query_as(
                        "select * from trainings where training_id in (select training_id from clients_trainings where client_id=$1) order by date_time;"
                    )
                    .bind(client_id)
            ).await?;

        non_empty(rows)
    }

    async fn get_all_by_coach_on_date(
        &self,
        ctx: &DbContext,
        coach_id: i64,
        date: NaiveDate
    ) -> RepositoryResult<Vec<Training>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(
                sqlx
                    ::query_as(
                        "select * from trainings where coach_id=$1 and (date_time at time zone 'UTC')::date=$2 order by date_time;"
                    )
                    .bind(coach_id)
                    .bind(date)
            ).await?;

        non_empty(rows)
    }

    async fn get_all_by_date_time(
        &self,
        ctx: &DbContext,
        date_time: DateTime<Utc>
    ) -> RepositoryResult<Vec<Training>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(
                sqlx
                    ::query_as("select * from trainings where date_time=$1 order by training_id;")
                    .bind(date_time)
            ).await?;

        non_empty(rows)
    }

    async fn get_all_between_date_time(
        &self,
        ctx: &DbContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>
    ) -> RepositoryResult<Vec<Training>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(
                sqlx
                    ::query_as(
                        "select * from trainings where date_time between $1 and $2 order by date_time;"
                    )
                    .bind(from)
                    .bind(to)
            ).await?;

        non_empty(rows)
    }

    async fn reduce_available_places_num(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()> {
        self.returning_id(
            ctx,
            "update trainings set available_places_num = available_places_num - 1 where training_id=$1 returning training_id;",
            id
        ).await
    }

    async fn increase_available_places_num(&self, ctx: &DbContext, id: i64) -> RepositoryResult<()> {
        self.returning_id(
            ctx,
            "update trainings set available_places_num = available_places_num + 1 where training_id=$1 returning training_id;",
            id
        ).await
    }
}
