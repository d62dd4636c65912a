use crate::application::services::{DateDimensionService, HolidayService};
use crate::config::Config;
use crate::domain::errors::DomainResult;
use crate::domain::ports::holiday_source::HolidaySource;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::JsonHolidaySource;
use std::sync::Arc;

/// Wire the services over the configured holiday data directory
pub async fn build_app_state(config: &Config) -> DomainResult<AppState> {
    if !config.holiday_data_dir.is_dir() {
        tracing::warn!(
            "Holiday data directory {} does not exist; every lookup will report missing data",
            config.holiday_data_dir.display()
        );
    }

    let source = Arc::new(JsonHolidaySource::new(&config.holiday_data_dir)) as Arc<dyn HolidaySource>;
    build_app_state_with_source(source, config).await
}

/// Wire the services over an arbitrary holiday source
pub async fn build_app_state_with_source(
    source: Arc<dyn HolidaySource>,
    config: &Config,
) -> DomainResult<AppState> {
    let holiday_service = HolidayService::new(source);
    tracing::info!("Holiday service initialized");

    if !config.preload_years.is_empty() {
        holiday_service.preload(&config.preload_years).await?;
        tracing::info!("Holiday data preloaded for {:?}", config.preload_years);
    }

    let date_dimension_service = DateDimensionService::new(holiday_service.clone(), config.timezone)
        .with_max_range_days(config.max_range_days);
    tracing::info!(
        "Date dimension service initialized (timezone {}, max range {} days)",
        config.timezone,
        config.max_range_days
    );

    Ok(AppState::new(holiday_service, date_dimension_service))
}
