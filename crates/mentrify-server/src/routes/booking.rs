use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::booking::{
    BookingSummary, BookingWizard, CandidateDate, CandidateTime, DATES, TIME_SLOTS,
};
use crate::services::catalog;

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct BookingOptions {
    pub dates: &'static [CandidateDate],
    pub times: &'static [CandidateTime],
}

pub async fn options() -> Json<BookingOptions> {
    Json(BookingOptions {
        dates: &DATES,
        times: &TIME_SLOTS,
    })
}

/// Nothing is kept between requests: the wizard is replayed from the
/// posted selection up to the confirmation step.
fn replay_to_confirm(mentor_id: u32, body: &SelectionRequest) -> AppResult<BookingWizard> {
    let mut wizard = BookingWizard::new(mentor_id);
    if !body.date.is_empty() {
        wizard.select_date(&body.date)?;
    }
    if !body.time.is_empty() {
        wizard.select_time(&body.time)?;
    }
    wizard.proceed()?;
    Ok(wizard)
}

pub async fn confirm(
    Path(id): Path<u32>,
    Json(body): Json<SelectionRequest>,
) -> AppResult<Json<BookingSummary>> {
    let mentor = catalog::find(id)?;
    let wizard = replay_to_confirm(mentor.id, &body)?;
    Ok(Json(wizard.summary(mentor)))
}

pub async fn pay(
    Path(id): Path<u32>,
    Json(body): Json<SelectionRequest>,
) -> AppResult<Json<BookingSummary>> {
    let mentor = catalog::find(id)?;
    let mut wizard = replay_to_confirm(mentor.id, &body)?;
    wizard.pay()?;
    Ok(Json(wizard.summary(mentor)))
}
