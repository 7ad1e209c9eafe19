use axum::{
    extract::{Path, Query},
    Json,
};

use crate::error::AppResult;
use crate::models::mentor::Mentor;
use crate::services::catalog::{self, MentorFilter};

pub async fn list(Query(filter): Query<MentorFilter>) -> Json<Vec<&'static Mentor>> {
    Json(catalog::list(&filter))
}

pub async fn get(Path(id): Path<u32>) -> AppResult<Json<&'static Mentor>> {
    Ok(Json(catalog::find(id)?))
}
