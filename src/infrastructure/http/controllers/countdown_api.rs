use crate::bootstrap::AppState;
use crate::domain::format;
use crate::infrastructure::http::middleware::{ApiError, ApiResult};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Current countdown for one holiday, served from the refresh worker.
#[derive(Debug, Serialize)]
pub struct CountdownResponse {
    pub slug: String,
    pub name: String,
    pub sleeps_until: i64,
    pub is_today: bool,
    pub target_date: NaiveDate,
    pub label: String,
}

pub async fn get_countdown(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CountdownResponse>> {
    let holiday = state
        .registry
        .get(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", slug)))?;
    let handle = state
        .countdowns
        .get(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", slug)))?;

    let countdown = handle.current();

    Ok(Json(CountdownResponse {
        slug: holiday.slug.clone(),
        name: holiday.name.clone(),
        sleeps_until: countdown.sleeps_until,
        is_today: countdown.is_today,
        target_date: countdown.target_date,
        label: format::display_label(&countdown, holiday),
    }))
}
