use crate::{
    domain::entities::HolidayRecord,
    domain::services::calendar::parse_civil_date,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

/// POST /api/v1/holiday/holiday - Holiday entry for a date
pub async fn get_holiday(
    State(state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> ApiResult<Json<HolidayRecord>> {
    let date = parse_civil_date(&params.date, &state.timezone)?;

    state
        .holiday_service
        .get_for_date(date)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Holiday not found".to_string()))
}
