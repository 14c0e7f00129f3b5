use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::question::{NewQuestion, Question};

/// Repository trait for questions
///
/// Defines the contract for persisting and retrieving questions.
/// Implementations handle database-specific details.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Question>>;

    /// Find a question by its id
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Question>>;

    /// All questions in a category, ordered by id
    async fn find_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Question>>;

    /// Questions whose text contains the term, case-insensitively
    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>>;

    /// Insert a new question and return the stored row
    async fn create(&self, new_question: NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question by id
    async fn delete(&self, id: i64) -> RepositoryResult<()>;

    /// Total number of questions
    async fn count(&self) -> RepositoryResult<i64>;

    /// Number of questions in a category
    async fn count_by_category(&self, category_id: i64) -> RepositoryResult<i64>;
}
