use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::notion::NotionError;

#[derive(Debug)]
pub enum AppError {
    Forbidden(String),
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error while submitting to Notion".to_string(),
                )
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<NotionError> for AppError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::DatabaseNotFound(detail) => {
                tracing::warn!("Notion database not found: {detail}");
                AppError::BadRequest(
                    "Notion database not found. Please check your database ID.".to_string(),
                )
            }
            NotionError::Unauthorized(detail) => {
                tracing::warn!("Notion rejected credentials: {detail}");
                AppError::Unauthorized(
                    "Unauthorized access to Notion. Please check your integration token."
                        .to_string(),
                )
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
