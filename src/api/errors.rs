use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error covering the four terminal failure states
///
/// Every failure leaving a handler is one of 400, 404, 405 or 422, each
/// rendered as the same JSON body shape with a fixed message per status.
/// There is no retry or recovery path.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    /// Creates a 400 Bad Request error
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "bad request",
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "resource not found",
        }
    }

    /// Creates a 405 Method Not Allowed error
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "method not allowed",
        }
    }

    /// Creates a 422 Unprocessable error
    pub fn unprocessable() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    /// Syntactically broken bodies are the client's 400; a well-formed body
    /// that matches no request shape fails like a storage constraint, 422.
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                Self::bad_request()
            }
            _ => Self::unprocessable(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> Self {
        Self::bad_request()
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::bad_request()
    }
}

/// Router fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Method-router fallback for known paths hit with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_closed_set() {
        assert_eq!(ApiError::bad_request().status.as_u16(), 400);
        assert_eq!(ApiError::not_found().status.as_u16(), 404);
        assert_eq!(ApiError::method_not_allowed().status.as_u16(), 405);
        assert_eq!(ApiError::unprocessable().status.as_u16(), 422);
    }

    #[test]
    fn messages_are_fixed_strings() {
        assert_eq!(ApiError::bad_request().message, "bad request");
        assert_eq!(ApiError::not_found().message, "resource not found");
        assert_eq!(ApiError::method_not_allowed().message, "method not allowed");
        assert_eq!(ApiError::unprocessable().message, "unprocessable");
    }
}
