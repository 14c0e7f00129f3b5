use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::question::Question;
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{SqliteCategoryRepository, SqliteQuestionRepository};

/// The selector the play view sends for "all categories".
const ANY_CATEGORY: &str = "click";

/// Request body for a quiz draw
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: CategorySelector,
}

/// The category selector arrives either as a bare display name or as an
/// object carrying one under `type`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategorySelector {
    Name(String),
    Object {
        #[serde(rename = "type")]
        name: String,
    },
}

impl CategorySelector {
    fn name(&self) -> &str {
        match self {
            CategorySelector::Name(name) => name,
            CategorySelector::Object { name } => name,
        }
    }
}

/// Response for a quiz draw: the next question plus the size of the
/// category's whole pool, or the end-of-quiz marker.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next {
        question: Question,
        num_question_per_cat: i64,
    },
    End {
        question: &'static str,
    },
}

impl QuizResponse {
    fn end() -> Self {
        QuizResponse::End { question: "end" }
    }
}

/// Draw the next quiz question
///
/// POST /quizzes
///
/// Chooses uniformly at random among the questions not yet seen, optionally
/// scoped to one category. `num_question_per_cat` is the total pool size for
/// the scope, ignoring the previously-seen filter. An unknown category name
/// is a 404.
pub async fn draw_quiz(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload?;

    let questions = SqliteQuestionRepository::new(pool.clone());
    let categories = SqliteCategoryRepository::new(pool);

    let category = match request.quiz_category.name() {
        ANY_CATEGORY => None,
        name => Some(
            categories
                .find_by_name(name)
                .await
                .map_err(|e| {
                    tracing::error!("failed to resolve quiz category {name:?}: {e}");
                    ApiError::unprocessable()
                })?
                .ok_or_else(ApiError::not_found)?,
        ),
    };

    let (selection, pool_size) = match &category {
        Some(category) => (
            questions.find_by_category(category.id).await.map_err(|e| {
                tracing::error!("failed to list questions for category {}: {e}", category.id);
                ApiError::unprocessable()
            })?,
            questions.count_by_category(category.id).await.map_err(|e| {
                tracing::error!("failed to count questions for category {}: {e}", category.id);
                ApiError::unprocessable()
            })?,
        ),
        None => (
            questions.find_all().await.map_err(|e| {
                tracing::error!("failed to list questions: {e}");
                ApiError::unprocessable()
            })?,
            questions.count().await.map_err(|e| {
                tracing::error!("failed to count questions: {e}");
                ApiError::unprocessable()
            })?,
        ),
    };

    let candidates: Vec<i64> = selection
        .iter()
        .filter(|q| !request.previous_questions.contains(&q.id))
        .map(|q| q.id)
        .collect();

    let drawn = match candidates.choose(&mut rand::thread_rng()) {
        Some(id) => *id,
        None => return Ok(Json(QuizResponse::end())),
    };

    let question = questions.find_by_id(drawn).await.map_err(|e| {
        tracing::error!("failed to load drawn question {drawn}: {e}");
        ApiError::unprocessable()
    })?;

    match question {
        Some(question) => Ok(Json(QuizResponse::Next {
            question,
            num_question_per_cat: pool_size,
        })),
        None => Ok(Json(QuizResponse::end())),
    }
}
