// API layer: router, handlers, pagination and error mapping

pub mod errors;
pub mod handlers;
pub mod pagination;

use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{categories, questions, quizzes};

/// Builds the application router over the given connection pool.
///
/// Unknown paths fall through to the 404 body and known paths hit with the
/// wrong method to the 405 body, so every failure leaves through the same
/// error shape. CORS and request tracing apply to every route.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).fallback(errors::method_not_allowed),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_or_search)
                .fallback(errors::method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(questions::delete_question).fallback(errors::method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(categories::list_category_questions).fallback(errors::method_not_allowed),
        )
        .route(
            "/quizzes",
            post(quizzes::draw_quiz).fallback(errors::method_not_allowed),
        )
        .fallback(errors::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}
