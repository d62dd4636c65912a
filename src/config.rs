use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

use crate::application::services::date_dimension_service::DEFAULT_MAX_RANGE_DAYS;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub holiday_data_dir: PathBuf,
    pub timezone: Tz,
    pub max_range_days: i64,
    pub preload_years: Vec<i32>,
    pub cors_allowed_origins: Vec<String>,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8088".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holiday_data_dir = env::var("HOLIDAY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./holiday-cn"));

        let timezone_name = env::var("TIMEZONE").unwrap_or_else(|_| "Asia/Shanghai".to_string());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let max_range_days = match env::var("MAX_RANGE_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or(ConfigError::InvalidMaxRangeDays(value))?,
            Err(_) => DEFAULT_MAX_RANGE_DAYS,
        };

        let preload_years = match env::var("PRELOAD_YEARS") {
            Ok(value) => parse_years(&value)?,
            Err(_) => Vec::new(),
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| parse_list(&value))
            .unwrap_or_default();

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "datedim".to_string());

        let metrics_enabled = env::var("METRICS_ENABLED")
            .map(|value| !matches!(value.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .unwrap_or(9000);

        Ok(Config {
            server_host,
            server_port,
            holiday_data_dir,
            timezone,
            max_range_days,
            preload_years,
            cors_allowed_origins,
            otel_exporter_endpoint,
            service_name,
            metrics_enabled,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_years(value: &str) -> Result<Vec<i32>, ConfigError> {
    parse_list(value)
        .into_iter()
        .map(|year| {
            year.parse::<i32>()
                .map_err(|_| ConfigError::InvalidPreloadYears(value.to_string()))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("MAX_RANGE_DAYS must be a positive integer, got {0}")]
    InvalidMaxRangeDays(String),

    #[error("PRELOAD_YEARS must be a comma separated list of years, got {0}")]
    InvalidPreloadYears(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" http://a.example , ,http://b.example"),
            vec!["http://a.example", "http://b.example"]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("2024, 2025").unwrap(), vec![2024, 2025]);
        assert!(matches!(
            parse_years("2024,next"),
            Err(ConfigError::InvalidPreloadYears(_))
        ));
    }
}
