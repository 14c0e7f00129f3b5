use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::api::pagination::{paginate, PageQuery};
use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{SqliteCategoryRepository, SqliteQuestionRepository};

/// Response for the category listing
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

/// Response for the per-category question listing
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Maps categories to the `{id: type}` wire shape, keys in id order.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// List all available categories
///
/// GET /categories
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let repo = SqliteCategoryRepository::new(pool);

    let categories = repo.find_all().await.map_err(|e| {
        tracing::error!("failed to list categories: {e}");
        ApiError::unprocessable()
    })?;

    if categories.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(CategoriesResponse {
        categories: category_map(categories),
    }))
}

/// List the questions belonging to one category
///
/// GET /categories/:id/questions
///
/// An unknown category is a 404 before any questions are considered.
/// `totalQuestions` is the grand total across all categories, not the
/// filtered count; clients read it as the size of the whole question bank.
pub async fn list_category_questions(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = id?;
    let Query(page) = page?;

    let categories = SqliteCategoryRepository::new(pool.clone());
    let questions = SqliteQuestionRepository::new(pool);

    let category = categories
        .find_by_id(category_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to load category {category_id}: {e}");
            ApiError::unprocessable()
        })?
        .ok_or_else(ApiError::not_found)?;

    let selection = questions.find_by_category(category_id).await.map_err(|e| {
        tracing::error!("failed to list questions for category {category_id}: {e}");
        ApiError::unprocessable()
    })?;

    let current = paginate(&selection, page.page());
    if current.is_empty() {
        return Err(ApiError::not_found());
    }

    let total = questions.count().await.map_err(|e| {
        tracing::error!("failed to count questions: {e}");
        ApiError::unprocessable()
    })?;

    Ok(Json(CategoryQuestionsResponse {
        questions: current.to_vec(),
        total_questions: total,
        current_category: category.kind,
    }))
}
