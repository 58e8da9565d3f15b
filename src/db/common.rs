use sqlx::PgPool;

use crate::db::error::{ RepositoryError, RepositoryResult };

// Entity-agnostic repository trait that all Postgres repositories implement
pub trait Repository {
    /// Get the connection pool
    fn pool(&self) -> &PgPool;
}

/// Collection lookups report "nothing matched" as a missing entity rather than
/// an empty collection
pub fn non_empty<T>(rows: Vec<T>) -> RepositoryResult<Vec<T>> {
    if rows.is_empty() {
        return Err(RepositoryError::EntityDoesNotExist);
    }
    Ok(rows)
}

/// Turn an optional row into the entity or a missing-entity error
pub fn found<T>(row: Option<T>) -> RepositoryResult<T> {
    row.ok_or(RepositoryError::EntityDoesNotExist)
}
