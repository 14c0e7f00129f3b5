use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::category::Category;

/// Repository trait for categories
///
/// Categories are read-only from the API's perspective, so the contract
/// only covers lookups.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its id
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>>;

    /// Find a category by its display name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}
