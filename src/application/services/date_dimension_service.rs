use crate::application::services::holiday_service::HolidayService;
use crate::domain::entities::DateDimensionRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::date_dimension::derive_record;
use chrono::NaiveDate;
use chrono_tz::Tz;

pub const HOURS_PER_DAY: u32 = 24;
pub const DEFAULT_MAX_RANGE_DAYS: i64 = 3660;

/// Expands civil dates into hourly date dimension rows.
#[derive(Clone)]
pub struct DateDimensionService {
    holiday_service: HolidayService,
    timezone: Tz,
    max_range_days: i64,
}

impl DateDimensionService {
    pub fn new(holiday_service: HolidayService, timezone: Tz) -> Self {
        Self {
            holiday_service,
            timezone,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }

    pub fn with_max_range_days(mut self, max_range_days: i64) -> Self {
        self.max_range_days = max_range_days;
        self
    }

    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    pub fn max_range_days(&self) -> i64 {
        self.max_range_days
    }

    /// One row for `date` at `hour`
    pub async fn derive_instant(
        &self,
        date: NaiveDate,
        hour: u32,
    ) -> DomainResult<DateDimensionRecord> {
        let holiday = self.holiday_service.get_for_date(date).await?;
        derive_record(&self.timezone, date, hour, holiday.as_ref())
    }

    /// The 24 hourly rows of `date`, hour 0 first
    pub async fn get_for_date(&self, date: NaiveDate) -> DomainResult<Vec<DateDimensionRecord>> {
        let holiday = self.holiday_service.get_for_date(date).await?;

        let records = (0..HOURS_PER_DAY)
            .map(|hour| derive_record(&self.timezone, date, hour, holiday.as_ref()))
            .collect::<DomainResult<Vec<_>>>()?;

        metrics::counter!("date_dimension_records_total").increment(records.len() as u64);
        Ok(records)
    }

    /// Hourly rows of every civil day in `[start, end]`.
    ///
    /// Fails with `InvalidRange` when `end` is before `start` and with
    /// `RangeTooLarge` when the range spans more than `max_range_days` days.
    pub async fn get_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<DateDimensionRecord>> {
        let days = self.range_days(start, end)?;
        tracing::debug!("Deriving date dimension for {} .. {} ({} days)", start, end, days);

        let mut records = Vec::with_capacity(days as usize * HOURS_PER_DAY as usize);
        for date in start.iter_days().take(days as usize) {
            records.extend(self.get_for_date(date).await?);
        }
        Ok(records)
    }

    /// Number of civil days in `[start, end]` after validating the range
    pub fn range_days(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<i64> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }

        let days = (end - start).num_days() + 1;
        if days > self.max_range_days {
            return Err(DomainError::RangeTooLarge {
                days,
                max: self.max_range_days,
            });
        }
        Ok(days)
    }
}
