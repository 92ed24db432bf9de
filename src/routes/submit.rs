use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::form::Submission;
use crate::submission::parser;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub notion_page_id: String,
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;
    let submission = Submission::from_value(&raw).map_err(AppError::BadRequest)?;

    let properties = state.properties.to_properties(&submission, Utc::now());
    let page_id = state
        .notion
        .create_page(&state.config.notion_database_id, properties)
        .await?;

    tracing::info!("Created Notion page {page_id}");

    Ok(Json(SubmitResponse {
        success: true,
        message: "Form submitted successfully".to_string(),
        notion_page_id: page_id,
    }))
}
