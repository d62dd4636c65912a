use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::domain::errors::DomainError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

// Convert from domain errors
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::HolidayDataUnavailable(_) => ApiError::NotFound(err.to_string()),
            DomainError::InvalidRange { .. }
            | DomainError::RangeTooLarge { .. }
            | DomainError::ValidationError(_) => ApiError::BadRequest(err.to_string()),
            DomainError::MalformedHolidayData { .. } | DomainError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

// Convert from CSV encoding errors
impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Internal(format!("CSV encoding error: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_domain_error_mapping() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(matches!(
            ApiError::from(DomainError::HolidayDataUnavailable(2026)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::InvalidRange { start: day, end: day }),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::RangeTooLarge { days: 10, max: 5 }),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::MalformedHolidayData {
                year: 2024,
                reason: "bad".to_string()
            }),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        let response = ApiError::NotFound("Holiday not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
