//! Civil calendar arithmetic used by the date dimension.
//!
//! Every function here is pure: results depend only on the arguments.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, Offset, TimeZone,
};
use chrono_tz::Tz;

use crate::domain::entities::Shift;
use crate::domain::errors::{DomainError, DomainResult};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn ymd(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::Internal(format!("Date {:04}-{:02}-{:02} out of range", year, month, day))
    })
}

fn out_of_range(date: NaiveDate) -> DomainError {
    DomainError::Internal(format!("Calendar arithmetic out of range near {}", date))
}

/// `[0,8)` night, `[8,17)` morning, `[17,24)` mid
pub fn shift_for_hour(hour: u32) -> Shift {
    match hour {
        0..=7 => Shift::Night,
        8..=16 => Shift::Morning,
        _ => Shift::Mid,
    }
}

pub fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

pub fn year_bounds(year: i32) -> DomainResult<(NaiveDate, NaiveDate)> {
    Ok((ymd(year, 1, 1)?, ymd(year, 12, 31)?))
}

pub fn month_start(date: NaiveDate) -> DomainResult<NaiveDate> {
    ymd(date.year(), date.month(), 1)
}

/// Last calendar day of the month containing `date` (28/29/30/31)
pub fn month_end(date: NaiveDate) -> DomainResult<NaiveDate> {
    month_start(date)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| out_of_range(date))
}

pub fn month_bounds(date: NaiveDate) -> DomainResult<(NaiveDate, NaiveDate)> {
    Ok((month_start(date)?, month_end(date)?))
}

pub fn quarter_bounds(date: NaiveDate) -> DomainResult<(NaiveDate, NaiveDate)> {
    let first_month = (quarter_of(date.month()) - 1) * 3 + 1;
    let start = ymd(date.year(), first_month, 1)?;
    let end = month_end(ymd(date.year(), first_month + 2, 1)?)?;
    Ok((start, end))
}

/// Bounds of the calendar month before the one containing `date`.
/// January rolls back to December of the prior year.
pub fn prev_month_bounds(date: NaiveDate) -> DomainResult<(NaiveDate, NaiveDate)> {
    let this_month = month_start(date)?;
    let start = this_month
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| out_of_range(date))?;
    let end = this_month.pred_opt().ok_or_else(|| out_of_range(date))?;
    Ok((start, end))
}

/// Same month and day one year earlier. Feb 29 clamps to Feb 28.
pub fn prev_year_anchor(date: NaiveDate) -> DomainResult<NaiveDate> {
    date.checked_sub_months(Months::new(12))
        .ok_or_else(|| out_of_range(date))
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> DomainResult<(NaiveDate, NaiveDate)> {
    let from_monday = date.weekday().num_days_from_monday() as u64;
    let start = date
        .checked_sub_days(Days::new(from_monday))
        .ok_or_else(|| out_of_range(date))?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| out_of_range(date))?;
    Ok((start, end))
}

/// ISO-8601 week label, e.g. `2025-W01` for 2024-12-30
pub fn week_identifier(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

pub fn week_of_month(day: u32) -> u32 {
    (day - 1) / 7 + 1
}

/// Monday = 1 ... Sunday = 7
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    day_of_week(date) >= 6
}

/// Wall-clock `hour:00` of `date` in `tz`.
///
/// An ambiguous wall time resolves to the earlier instant; a time skipped by
/// a DST gap resolves to the first valid instant after it.
pub fn local_instant(tz: &Tz, date: NaiveDate, hour: u32) -> DomainResult<DateTime<FixedOffset>> {
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| DomainError::ValidationError(format!("Invalid hour {}", hour)))?;

    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(naive + chrono::Duration::hours(1)))
                .earliest()
        })
        .ok_or_else(|| out_of_range(date))?;

    Ok(local.with_timezone(&local.offset().fix()))
}

/// Resolve user input to a civil date of `tz`.
///
/// Accepts RFC 3339 (converted into `tz` first), a naive date-time (already
/// wall-clock time of `tz`) or a plain `YYYY-MM-DD` date.
pub fn parse_civil_date(input: &str, tz: &Tz) -> DomainResult<NaiveDate> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(tz).date_naive());
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.date());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        DomainError::ValidationError(format!(
            "Invalid date {:?}: expected YYYY-MM-DD, a date-time or RFC 3339",
            input
        ))
    })
}
