use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Holiday data for year {0} is not available")]
    HolidayDataUnavailable(i32),
    #[error("Malformed holiday data for year {year}: {reason}")]
    MalformedHolidayData { year: i32, reason: String },
    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Range of {days} days exceeds the maximum of {max} days")]
    RangeTooLarge { days: i64, max: i64 },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
