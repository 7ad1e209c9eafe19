use axum::{http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::applications::{self, MentorApplication};

pub async fn submit(
    Json(body): Json<MentorApplication>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    applications::submit(&body)?;
    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({"ok": true}))))
}
