use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::auth;
use crate::error::AppResult;
use crate::models::{RegisterData, User};
use crate::routes::AppState;
use crate::storage::LocalStorage;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Extension(storage): Extension<LocalStorage>,
    Json(body): Json<RegisterData>,
) -> AppResult<(StatusCode, Json<User>)> {
    body.validate()?;
    let user = auth::register(&storage, body, state.config.register_delay).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    Extension(storage): Extension<LocalStorage>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<User>> {
    let user = auth::login(&storage, &body.email, &body.password, state.config.login_delay).await?;
    Ok(Json(user))
}

pub async fn logout(Extension(storage): Extension<LocalStorage>) -> AppResult<Json<serde_json::Value>> {
    auth::logout(&storage)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

pub async fn me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}
