use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::domain::entities::{DateDimensionRecord, DateType, HolidayRecord};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::calendar;

/// Classify a civil date from its weekday and the holiday entry for it.
///
/// A listed day that is not an off day is a makeup workday, even on a weekend.
pub fn classify_date(day_of_week: u32, holiday: Option<&HolidayRecord>) -> DateType {
    match holiday {
        Some(h) if h.is_off_day => DateType::Holiday,
        Some(_) => DateType::Workday,
        None if day_of_week <= 5 => DateType::Workday,
        None => DateType::RestDay,
    }
}

/// Derive the full attribute set of `date` at `hour` (0-23) in `tz`.
pub fn derive_record(
    tz: &Tz,
    date: NaiveDate,
    hour: u32,
    holiday: Option<&HolidayRecord>,
) -> DomainResult<DateDimensionRecord> {
    if hour > 23 {
        return Err(DomainError::ValidationError(format!(
            "Hour must be within 0..=23, got {}",
            hour
        )));
    }

    let year = date.year();
    let month = date.month();
    let quarter = calendar::quarter_of(month);
    let day_of_week = calendar::day_of_week(date);

    let (year_start_date, year_end_date) = calendar::year_bounds(year)?;
    let (quarter_start_date, quarter_end_date) = calendar::quarter_bounds(date)?;
    let (month_start_date, month_end_date) = calendar::month_bounds(date)?;
    let (prev_month_start_date, prev_month_end_date) = calendar::prev_month_bounds(date)?;
    let (week_start_date, week_end_date) = calendar::week_bounds(date)?;

    let prev = calendar::prev_year_anchor(date)?;
    let (prev_year_start_date, prev_year_end_date) = calendar::year_bounds(prev.year())?;
    let (prev_year_month_start_date, prev_year_month_end_date) = calendar::month_bounds(prev)?;

    Ok(DateDimensionRecord {
        date,
        date_id: date.format("%Y%m%d").to_string(),
        date_hour_id: format!("{}{:02}", date.format("%Y%m%d"), hour),
        date_time: calendar::local_instant(tz, date, hour)?,

        year,
        year_start_date,
        year_end_date,

        quarter,
        year_quarter: format!("{}Q{}", year, quarter),
        quarter_start_date,
        quarter_end_date,

        month,
        year_month: date.format("%Y-%m").to_string(),
        month_start_date,
        month_end_date,
        prev_month: prev_month_start_date.month(),
        prev_month_start_date,
        prev_month_end_date,

        week_of_year: date.iso_week().week(),
        week_identifier: calendar::week_identifier(date),
        week_start_date,
        week_end_date,
        week_of_month: calendar::week_of_month(date.day()),

        day_of_year: date.ordinal(),
        day_of_month: date.day(),
        day_of_week,
        weekday: date.format("%A").to_string(),
        is_weekend: calendar::is_weekend(date).into(),

        hour,
        shift: calendar::shift_for_hour(hour),

        date_type: classify_date(day_of_week, holiday),
        holiday_name: holiday.map(|h| h.name.clone()).unwrap_or_default(),

        prev_year_same_date: prev,
        prev_year_date_id: prev.format("%Y%m%d").to_string(),
        prev_year_date_time: calendar::local_instant(tz, prev, hour)?,
        prev_year: prev.year(),
        prev_year_start_date,
        prev_year_end_date,
        prev_year_month: prev.month(),
        prev_year_month_start_date,
        prev_year_month_end_date,
        prev_year_day: prev.day(),
    })
}
