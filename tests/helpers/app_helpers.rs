#![allow(dead_code)]
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use datedim::application::services::{DateDimensionService, HolidayService};
use datedim::bootstrap::build_app_state;
use datedim::config::Config;
use datedim::infrastructure::http::router::build_router;
use datedim::infrastructure::persistence::JsonHolidaySource;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

pub fn holiday_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("holiday-cn")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        holiday_data_dir: holiday_data_dir(),
        timezone: chrono_tz::Asia::Shanghai,
        max_range_days: 400,
        preload_years: Vec::new(),
        cors_allowed_origins: Vec::new(),
        otel_exporter_endpoint: None,
        service_name: "datedim-test".to_string(),
        metrics_enabled: false,
        metrics_port: 0,
    }
}

pub fn holiday_service() -> HolidayService {
    HolidayService::new(Arc::new(JsonHolidaySource::new(holiday_data_dir())))
}

pub fn date_dimension_service() -> DateDimensionService {
    DateDimensionService::new(holiday_service(), chrono_tz::Asia::Shanghai)
}

pub async fn test_app() -> Router {
    let config = test_config();
    let state = build_app_state(&config).await.unwrap();
    build_router(state, &config.cors_allowed_origins)
}

/// Send a request and return status plus raw body
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, method, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
