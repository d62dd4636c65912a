use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let holiday = Router::new().route(
        "/holiday",
        get(controllers::holiday::get_holiday).post(controllers::holiday::get_holiday),
    );

    let date_dimension = Router::new()
        .route(
            "/date-dimension",
            get(controllers::date_dimension::get_for_date)
                .post(controllers::date_dimension::get_for_date),
        )
        .route(
            "/date-dimension/range",
            get(controllers::date_dimension::get_for_range)
                .post(controllers::date_dimension::get_for_range),
        )
        .route(
            "/date-dimension/csv",
            get(controllers::date_dimension::export_csv)
                .post(controllers::date_dimension::export_csv),
        );

    let api_v1 = Router::new()
        .nest("/holiday", holiday)
        .nest("/date_dimension", date_dimension);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api_v1)
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin unless an explicit list is configured
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root_handler() -> &'static str {
    "Chinese Holiday and Date Dimension API"
}

async fn health_handler() -> &'static str {
    "OK"
}
