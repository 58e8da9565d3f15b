use thiserror::Error;

/// Errors surfaced by the repositories
///
/// A missing row is always reported as [`RepositoryError::EntityDoesNotExist`];
/// every other driver failure is passed through untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity does not exist")]
    EntityDoesNotExist,

    #[error(transparent)]
    Database(sqlx::Error),

    #[error("transaction is still shared by another context clone")]
    TransactionShared,
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityDoesNotExist)
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::EntityDoesNotExist,
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
