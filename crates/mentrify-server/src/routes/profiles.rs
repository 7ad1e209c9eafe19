use axum::{extract::Path, http::StatusCode, Extension, Json};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::profile::{MenteeProfile, MentorProfile};
use crate::models::User;
use crate::services::availability::{RecurringUpdate, SlotField};
use crate::services::profiles::{self, ProfileView};
use crate::storage::LocalStorage;

#[derive(Debug, Deserialize)]
pub struct ExceptionRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub reason: String,
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub async fn get_mentor(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> AppResult<Json<ProfileView<MentorProfile>>> {
    Ok(Json(profiles::load_mentor_profile(&storage, &user, &id, today())?))
}

pub async fn save_mentor(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<MentorProfile>,
) -> AppResult<Json<MentorProfile>> {
    Ok(Json(profiles::save_mentor_profile(&storage, &user, &id, body)?))
}

pub async fn reset_mentor(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> AppResult<Json<MentorProfile>> {
    Ok(Json(profiles::reset_mentor_profile(&storage, &user, &id, today())?))
}

pub async fn add_slot(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<MentorProfile>)> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.add_slot();
        Ok(())
    })?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn update_slot(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path((id, index)): Path<(String, usize)>,
    Json(change): Json<SlotField>,
) -> AppResult<Json<MentorProfile>> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.update_slot(index, change)
    })?;
    Ok(Json(profile))
}

pub async fn remove_slot(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path((id, index)): Path<(String, usize)>,
) -> AppResult<Json<MentorProfile>> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.remove_slot(index).map(|_| ())
    })?;
    Ok(Json(profile))
}

pub async fn duplicate_slot(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path((id, index)): Path<(String, usize)>,
) -> AppResult<(StatusCode, Json<MentorProfile>)> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.duplicate_slot(index).map(|_| ())
    })?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn update_recurring(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<RecurringUpdate>,
) -> AppResult<Json<MentorProfile>> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.set_recurring(body)
    })?;
    Ok(Json(profile))
}

pub async fn add_exception(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<ExceptionRequest>,
) -> AppResult<(StatusCode, Json<MentorProfile>)> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.add_exception(&body.date, &body.reason)
    })?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn remove_exception(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path((id, index)): Path<(String, usize)>,
) -> AppResult<Json<MentorProfile>> {
    let profile = profiles::edit_mentor_availability(&storage, &user, &id, today(), |editor| {
        editor.remove_exception(index).map(|_| ())
    })?;
    Ok(Json(profile))
}

pub async fn get_mentee(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> AppResult<Json<ProfileView<MenteeProfile>>> {
    Ok(Json(profiles::load_mentee_profile(&storage, &user, &id)?))
}

pub async fn save_mentee(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<MenteeProfile>,
) -> AppResult<Json<MenteeProfile>> {
    Ok(Json(profiles::save_mentee_profile(&storage, &user, &id, body)?))
}

pub async fn reset_mentee(
    Extension(storage): Extension<LocalStorage>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> AppResult<Json<MenteeProfile>> {
    Ok(Json(profiles::reset_mentee_profile(&storage, &user, &id)?))
}
