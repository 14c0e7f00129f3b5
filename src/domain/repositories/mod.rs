// Repository traits (ports) for the data access layer
// Implementations live in the infrastructure layer

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;

use thiserror::Error;

/// Errors surfaced by the data access layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no row with id {0}")]
    RowNotFound(i64),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
