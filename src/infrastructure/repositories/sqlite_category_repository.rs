use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::category::Category;
use crate::domain::repositories::{CategoryRepository, RepositoryResult};

/// SQLite implementation of CategoryRepository
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Creates a new SqliteCategoryRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE type = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }
}
