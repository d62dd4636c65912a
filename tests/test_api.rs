mod helpers;

use axum::http::StatusCode;
use datedim::domain::entities::DATE_DIMENSION_FIELDS;
use helpers::*;

#[tokio::test]
async fn test_health() {
    let (status, body) = send(test_app().await, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_holiday_found() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/holiday/holiday?date=2024-05-05",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Labor Day");
    assert_eq!(json["date"], "2024-05-05");
    assert_eq!(json["isOffDay"], true);
}

#[tokio::test]
async fn test_holiday_not_found() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/holiday/holiday?date=2024-01-02T10:00:00",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Holiday not found");
}

#[tokio::test]
async fn test_holiday_year_missing() {
    let (status, json) = send_json(
        test_app().await,
        "GET",
        "/api/v1/holiday/holiday?date=1999-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].as_str().unwrap().contains("1999"));
}

#[tokio::test]
async fn test_date_dimension_day() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension?date=2024-04-28",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 24);
    assert_eq!(records[12]["date_hour_id"], "2024042812");
    assert_eq!(records[12]["date_type"], "Workday");
    assert_eq!(records[12]["is_weekend"], "Yes");
    assert_eq!(records[12]["holiday_name"], "Labor Day");
    assert_eq!(records[12]["shift"], "morning");
    assert_eq!(records[12]["date_time"], "2024-04-28T12:00:00+08:00");
}

#[tokio::test]
async fn test_date_dimension_resolves_rfc3339_in_canonical_zone() {
    // 17:00 UTC on May 4th is already May 5th in Shanghai
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension?date=2024-05-04T17:00:00Z",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["date"], "2024-05-05");
    assert_eq!(json[0]["date_type"], "Holiday");
}

#[tokio::test]
async fn test_date_dimension_range() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension/range?start_date=2024-02-28&end_date=2024-03-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 72);
    assert_eq!(records[24]["date"], "2024-02-29");
    assert_eq!(records[24]["month_end_date"], "2024-02-29");
    assert_eq!(records[24]["prev_year_same_date"], "2023-02-28");
}

#[tokio::test]
async fn test_date_dimension_reversed_range() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension/range?start_date=2024-03-01&end_date=2024-02-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Invalid range"));
}

#[tokio::test]
async fn test_date_dimension_range_too_large() {
    let (status, _) = send(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension/range?start_date=2024-01-01&end_date=2025-12-31",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_date_dimension_bad_date() {
    let (status, json) = send_json(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension?date=yesterday",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Invalid date"));
}

#[tokio::test]
async fn test_date_dimension_missing_year() {
    let (status, _) = send(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension?date=1999-06-01",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_csv_export() {
    let (status, body) = send(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension/csv?start_date=2024-05-04&end_date=2024-05-05",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let document = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = document.lines().collect();

    assert_eq!(lines.len(), 1 + 48);
    assert_eq!(lines[0], DATE_DIMENSION_FIELDS.join(","));
    assert!(lines[1].starts_with("2024-05-04,20240504,2024050400,"));
    assert!(lines[48].starts_with("2024-05-05,20240505,2024050523,"));
    assert!(lines[48].contains(",Holiday,Labor Day,"));
}

#[tokio::test]
async fn test_csv_export_headers() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/date_dimension/date-dimension/csv?start_date=2024-01-02&end_date=2024-01-02")
        .body(Body::empty())
        .unwrap();
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=date_dimension.csv"
    );
}

#[tokio::test]
async fn test_csv_export_missing_year_fails_before_streaming() {
    let (status, body) = send(
        test_app().await,
        "POST",
        "/api/v1/date_dimension/date-dimension/csv?start_date=2025-12-31&end_date=2026-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("2026"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
