use crate::domain::entities::HolidayRecord;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Load every holiday entry published for `year`.
    ///
    /// Fails with `HolidayDataUnavailable` when the year has no document and
    /// with `MalformedHolidayData` when the document cannot be parsed.
    async fn load_year(&self, year: i32) -> DomainResult<Vec<HolidayRecord>>;
}
