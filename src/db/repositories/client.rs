use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::common::{ found, non_empty, Repository };
use crate::db::context::DbContext;
use crate::db::error::{ RepositoryError, RepositoryResult };
use crate::models::Client;

/// Client storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert the client and write the generated id back into it
    async fn create(&self, ctx: &DbContext, client: &mut Client) -> RepositoryResult<()>;

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Client>;

    async fn get_by_telephone(&self, ctx: &DbContext, telephone: &str) -> RepositoryResult<Client>;

    /// Clients assigned to a training
    async fn get_by_training(&self, ctx: &DbContext, training_id: i64) -> RepositoryResult<Vec<Client>>;

    async fn create_assignment(
        &self,
        ctx: &DbContext,
        client_id: i64,
        training_id: i64
    ) -> RepositoryResult<()>;

    async fn delete_assignment(
        &self,
        ctx: &DbContext,
        client_id: i64,
        training_id: i64
    ) -> RepositoryResult<()>;
}

/// Repository for client database operations
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    /// Create a new repository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Repository for PgClientRepository {
    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, ctx: &DbContext, client: &mut Client) -> RepositoryResult<()> {
        let (id,): (i64,) = ctx
            .tr_or_db(self.pool()).await
            .fetch_one(
                sqlx
                    ::query_as(
                        "insert into clients(name, telephone, mail, password) values($1, $2, $3, $4) returning client_id;"
                    )
                    .bind(&client.name)
                    .bind(&client.telephone)
                    .bind(&client.mail)
                    .bind(&client.password)
            ).await?;

        client.id = id;
        Ok(())
    }

    async fn get_by_id(&self, ctx: &DbContext, id: i64) -> RepositoryResult<Client> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(sqlx::query_as("select * from clients where client_id = $1;").bind(id)).await?;

        found(row)
    }

    async fn get_by_telephone(&self, ctx: &DbContext, telephone: &str) -> RepositoryResult<Client> {
        let row = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(
                sqlx::query_as("select * from clients where telephone = $1;").bind(telephone)
            ).await?;

        found(row)
    }

    async fn get_by_training(&self, ctx: &DbContext, training_id: i64) -> RepositoryResult<Vec<Client>> {
        let rows = ctx
            .tr_or_db(self.pool()).await
            .fetch_all(
                sqlx
                    ::query_as(
                        "select * from clients where client_id in (select client_id from clients_trainings where training_id=$1) order by client_id;"
                    )
                    .bind(training_id)
            ).await?;

        non_empty(rows)
    }

    async fn create_assignment(
        &self,
        ctx: &DbContext,
        client_id: i64,
        training_id: i64
    ) -> RepositoryResult<()> {
        let _: (i64,) = ctx
            .tr_or_db(self.pool()).await
            .fetch_one(
                sqlx
                    ::query_as(
                        "insert into clients_trainings(client_id, training_id) values($1, $2) returning client_id;"
                    )
                    .bind(client_id)
                    .bind(training_id)
            ).await?;

        Ok(())
    }

    async fn delete_assignment(
        &self,
        ctx: &DbContext,
        client_id: i64,
        training_id: i64
    ) -> RepositoryResult<()> {
        let deleted: Option<(i64,)> = ctx
            .tr_or_db(self.pool()).await
            .fetch_optional(
                sqlx
                    ::query_as(
                        "delete from clients_trainings where client_id=$1 and training_id=$2 returning client_id;"
                    )
                    .bind(client_id)
                    .bind(training_id)
            ).await?;

        deleted.map(|_| ()).ok_or(RepositoryError::EntityDoesNotExist)
    }
}
