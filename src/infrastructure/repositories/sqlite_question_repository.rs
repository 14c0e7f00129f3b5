use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{QuestionRepository, RepositoryError, RepositoryResult};

/// SQLite implementation of QuestionRepository
///
/// Runs plain runtime-checked queries so the crate builds without a live
/// database; the schema is pinned by the embedded migration.
pub struct SqliteQuestionRepository {
    pool: SqlitePool,
}

impl SqliteQuestionRepository {
    /// Creates a new SqliteQuestionRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn find_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE category = ?1
             ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        // SQLite LIKE is case-insensitive for ASCII; the match is
        // substring, not prefix.
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE question LIKE '%' || ?1 || '%'
             ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn create(&self, new_question: NewQuestion) -> RepositoryResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::RowNotFound(id));
        }

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_by_category(&self, category_id: i64) -> RepositoryResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions WHERE category = ?1")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
