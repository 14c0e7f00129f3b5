use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::api::pagination::{paginate, PageQuery};
use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{SqliteCategoryRepository, SqliteQuestionRepository};

use super::categories::category_map;

/// The list and search views are not category-scoped; the label they
/// report is fixed rather than derived from the data.
const CURRENT_CATEGORY: &str = "History";

/// Body for POST /questions, decided before dispatch: a payload carrying
/// `searchTerm` is a search, anything else must be a complete new question.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPayload {
    Search(SearchRequest),
    Create(NewQuestion),
}

/// Request body for a question search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response for the paginated question listing
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Response from a question deletion
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Response for a question search; unlike the listing, the total respects
/// the filter.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Response from a question creation; the resource is not echoed back.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
}

/// List all questions, paginated
///
/// GET /questions?page=N
///
/// `totalQuestions` ignores the page window and is always the grand total.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Query(page) = page?;

    let questions = SqliteQuestionRepository::new(pool.clone());
    let categories = SqliteCategoryRepository::new(pool);

    let selection = questions.find_all().await.map_err(|e| {
        tracing::error!("failed to list questions: {e}");
        ApiError::unprocessable()
    })?;

    let current = paginate(&selection, page.page());
    if current.is_empty() {
        return Err(ApiError::not_found());
    }

    let all_categories = categories.find_all().await.map_err(|e| {
        tracing::error!("failed to list categories: {e}");
        ApiError::unprocessable()
    })?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories: category_map(all_categories),
        current_category: CURRENT_CATEGORY.to_string(),
    }))
}

/// Delete a question and return the refreshed listing
///
/// DELETE /questions/:id?page=N
///
/// A missing id is reported as 422, not 404; every deletion failure
/// shares one status regardless of cause.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(question_id) = id?;
    let Query(page) = page?;

    let repo = SqliteQuestionRepository::new(pool);

    repo.find_by_id(question_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to load question {question_id}: {e}");
            ApiError::unprocessable()
        })?
        .ok_or_else(ApiError::unprocessable)?;

    repo.delete(question_id).await.map_err(|e| {
        tracing::error!("failed to delete question {question_id}: {e}");
        ApiError::unprocessable()
    })?;

    let selection = repo.find_all().await.map_err(|e| {
        tracing::error!("failed to list questions: {e}");
        ApiError::unprocessable()
    })?;

    let current = paginate(&selection, page.page());

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions: current.to_vec(),
        total_questions: selection.len(),
    }))
}

/// Create a question, or search question text
///
/// POST /questions
pub async fn create_or_search(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<QuestionsPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(page) = page?;
    let Json(payload) = payload?;

    let repo = SqliteQuestionRepository::new(pool);

    match payload {
        QuestionsPayload::Search(search) => {
            // An empty term is not a search.
            if search.search_term.is_empty() {
                return Err(ApiError::unprocessable());
            }

            let selection = repo.search(&search.search_term).await.map_err(|e| {
                tracing::error!("failed to search questions: {e}");
                ApiError::unprocessable()
            })?;

            let current = paginate(&selection, page.page());

            Ok(Json(SearchResponse {
                success: true,
                questions: current.to_vec(),
                total_questions: selection.len(),
                current_category: CURRENT_CATEGORY.to_string(),
            })
            .into_response())
        }
        QuestionsPayload::Create(new_question) => {
            repo.create(new_question).await.map_err(|e| {
                tracing::error!("failed to create question: {e}");
                ApiError::unprocessable()
            })?;

            Ok(Json(CreateQuestionResponse { success: true }).into_response())
        }
    }
}
