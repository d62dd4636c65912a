pub mod error;

pub use error::*;

use crate::application::services::{DateDimensionService, HolidayService};
use chrono_tz::Tz;

#[derive(Clone)]
pub struct AppState {
    /// Zone in which user supplied instants resolve to civil dates
    pub timezone: Tz,
    pub holiday_service: HolidayService,
    pub date_dimension_service: DateDimensionService,
}

impl AppState {
    pub fn new(holiday_service: HolidayService, date_dimension_service: DateDimensionService) -> Self {
        Self {
            timezone: *date_dimension_service.timezone(),
            holiday_service,
            date_dimension_service,
        }
    }
}
