use crate::domain::entities::HolidayRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_source::HolidaySource;
use async_trait::async_trait;
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Holiday source backed by fixed in-memory year documents.
///
/// Counts `load_year` calls so callers can observe cache behaviour.
#[derive(Clone, Default)]
pub struct InMemoryHolidaySource {
    years: Arc<HashMap<i32, Vec<HolidayRecord>>>,
    loads: Arc<AtomicUsize>,
}

impl InMemoryHolidaySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group records by the year of their civil date
    pub fn from_records(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        let mut years: HashMap<i32, Vec<HolidayRecord>> = HashMap::new();
        for record in records {
            years
                .entry(record.civil_date.year())
                .or_default()
                .push(record);
        }
        Self {
            years: Arc::new(years),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Register a year with no holidays at all
    pub fn with_empty_year(self, year: i32) -> Self {
        let mut years = (*self.years).clone();
        years.entry(year).or_default();
        Self {
            years: Arc::new(years),
            loads: self.loads,
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for InMemoryHolidaySource {
    async fn load_year(&self, year: i32) -> DomainResult<Vec<HolidayRecord>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Let concurrent callers pile up on the same load in tests
        tokio::task::yield_now().await;

        self.years
            .get(&year)
            .cloned()
            .ok_or(DomainError::HolidayDataUnavailable(year))
    }
}
