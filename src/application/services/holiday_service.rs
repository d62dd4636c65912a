use crate::domain::entities::{HolidayRecord, ISO_DATE_FORMAT};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_source::HolidaySource;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

/// Holidays of one year keyed by `YYYY-MM-DD`
pub type YearHolidays = HashMap<String, HolidayRecord>;

type YearSlot = Arc<OnceCell<Arc<YearHolidays>>>;

/// Holiday lookup backed by one document per calendar year.
///
/// Each year is loaded at most once and kept for the lifetime of the
/// service. Concurrent first lookups of a year wait on the same load. A
/// failed load is not cached, so a year provisioned later becomes visible
/// on the next lookup.
#[derive(Clone)]
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    years: Arc<RwLock<HashMap<i32, YearSlot>>>,
}

impl HolidayService {
    pub fn new(source: Arc<dyn HolidaySource>) -> Self {
        Self {
            source,
            years: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn slot(&self, year: i32) -> YearSlot {
        {
            let years = self.years.read().await;
            if let Some(slot) = years.get(&year) {
                return slot.clone();
            }
        }

        let mut years = self.years.write().await;
        years.entry(year).or_default().clone()
    }

    /// All holidays of `year`, loading the year's document on first use
    pub async fn year_holidays(&self, year: i32) -> DomainResult<Arc<YearHolidays>> {
        let slot = self.slot(year).await;

        let holidays = slot
            .get_or_try_init(|| async {
                let records = self.source.load_year(year).await?;
                tracing::info!("Holiday data for {} loaded ({} entries)", year, records.len());
                metrics::counter!("holiday_years_loaded_total", "year" => year.to_string())
                    .increment(1);

                let holidays: YearHolidays = records
                    .into_iter()
                    .map(|record| (record.date_key(), record))
                    .collect();
                Ok::<_, DomainError>(Arc::new(holidays))
            })
            .await
            .map_err(|e| {
                tracing::warn!("Holiday lookup for {} failed: {}", year, e);
                e
            })?;

        Ok(holidays.clone())
    }

    /// Holiday entry for `date`, or `None` when the date is not listed.
    ///
    /// Fails with `HolidayDataUnavailable` when the year has no data.
    pub async fn get_for_date(&self, date: NaiveDate) -> DomainResult<Option<HolidayRecord>> {
        let holidays = self.year_holidays(date.year()).await?;
        Ok(holidays
            .get(&date.format(ISO_DATE_FORMAT).to_string())
            .cloned())
    }

    /// Warm the cache for the given years
    pub async fn preload(&self, years: &[i32]) -> DomainResult<()> {
        for &year in years {
            self.year_holidays(year).await?;
        }
        Ok(())
    }

    /// Years whose data is currently cached, ascending
    pub async fn cached_years(&self) -> Vec<i32> {
        let years = self.years.read().await;
        let mut loaded: Vec<i32> = years
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(year, _)| *year)
            .collect();
        loaded.sort_unstable();
        loaded
    }
}
