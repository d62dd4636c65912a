use crate::{
    domain::entities::DateDimensionRecord,
    domain::services::calendar::parse_civil_date,
    infrastructure::export::csv::{self as csv_export, CSV_CONTENT_TYPE},
    infrastructure::http::controllers::holiday::DateQuery,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    body::Body,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Datelike, NaiveDate};
use futures::StreamExt;
use http::header;
use serde::Deserialize;

pub const CSV_FILENAME: &str = "date_dimension.csv";

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start_date: String,
    pub end_date: String,
}

impl RangeQuery {
    fn resolve(&self, state: &AppState) -> ApiResult<(NaiveDate, NaiveDate)> {
        Ok((
            parse_civil_date(&self.start_date, &state.timezone)?,
            parse_civil_date(&self.end_date, &state.timezone)?,
        ))
    }
}

/// POST /api/v1/date_dimension/date-dimension - 24 hourly rows of one day
pub async fn get_for_date(
    State(state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> ApiResult<Json<Vec<DateDimensionRecord>>> {
    let date = parse_civil_date(&params.date, &state.timezone)?;
    let records = state.date_dimension_service.get_for_date(date).await?;
    Ok(Json(records))
}

/// POST /api/v1/date_dimension/date-dimension/range - hourly rows of every day in a range
pub async fn get_for_range(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<Json<Vec<DateDimensionRecord>>> {
    let (start, end) = params.resolve(&state)?;
    let records = state
        .date_dimension_service
        .get_for_range(start, end)
        .await?;
    Ok(Json(records))
}

/// POST /api/v1/date_dimension/date-dimension/csv - range export as a CSV attachment
///
/// The range and the holiday data of every year it touches are checked
/// before the first byte is sent; rows are then streamed one day at a time.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<Response> {
    let (start, end) = params.resolve(&state)?;
    let days = state.date_dimension_service.range_days(start, end)?;

    let years: Vec<i32> = (start.year()..=end.year()).collect();
    state.holiday_service.preload(&years).await?;

    tracing::info!("Exporting date dimension CSV for {} .. {}", start, end);

    let header_chunk = csv_export::header().map_err(ApiError::from)?;
    let service = state.date_dimension_service.clone();
    let row_chunks = futures::stream::iter(start.iter_days().take(days as usize)).then(
        move |date| {
            let service = service.clone();
            async move {
                let records = service.get_for_date(date).await?;
                csv_export::rows(&records).map_err(ApiError::from)
            }
        },
    );
    let body = futures::stream::once(async move { Ok::<_, ApiError>(header_chunk) }).chain(row_chunks);

    let disposition = format!("attachment; filename={}", CSV_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(body),
    )
        .into_response())
}
