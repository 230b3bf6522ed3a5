// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;

use thiserror::Error;

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// No connection could be obtained from the pool
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepositoryError::Unavailable(err.to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
