use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Yes"),
            YesNo::No => write!(f, "No"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateType {
    Workday,
    #[serde(rename = "Rest-day")]
    RestDay,
    Holiday,
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateType::Workday => write!(f, "Workday"),
            DateType::RestDay => write!(f, "Rest-day"),
            DateType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Labor shift derived from the hour of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// 00:00 - 07:59
    Night,
    /// 08:00 - 16:59
    Morning,
    /// 17:00 - 23:59
    Mid,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Night => write!(f, "night"),
            Shift::Morning => write!(f, "morning"),
            Shift::Mid => write!(f, "mid"),
        }
    }
}

/// Column order of a date dimension row. Matches the field order of
/// [`DateDimensionRecord`] and is used verbatim as the CSV header.
pub const DATE_DIMENSION_FIELDS: [&str; 42] = [
    "date",
    "date_id",
    "date_hour_id",
    "date_time",
    "year",
    "year_start_date",
    "year_end_date",
    "quarter",
    "year_quarter",
    "quarter_start_date",
    "quarter_end_date",
    "month",
    "year_month",
    "month_start_date",
    "month_end_date",
    "prev_month",
    "prev_month_start_date",
    "prev_month_end_date",
    "week_of_year",
    "week_identifier",
    "week_start_date",
    "week_end_date",
    "week_of_month",
    "day_of_year",
    "day_of_month",
    "day_of_week",
    "weekday",
    "is_weekend",
    "hour",
    "shift",
    "date_type",
    "holiday_name",
    "prev_year_same_date",
    "prev_year_date_id",
    "prev_year_date_time",
    "prev_year",
    "prev_year_start_date",
    "prev_year_end_date",
    "prev_year_month",
    "prev_year_month_start_date",
    "prev_year_month_end_date",
    "prev_year_day",
];

/// Calendar attributes of one (civil date, hour) instant.
///
/// Built fresh per request by the date dimension service and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDimensionRecord {
    pub date: NaiveDate,
    pub date_id: String,      // YYYYMMDD
    pub date_hour_id: String, // YYYYMMDDHH
    pub date_time: DateTime<FixedOffset>,

    pub year: i32,
    pub year_start_date: NaiveDate,
    pub year_end_date: NaiveDate,

    pub quarter: u32,
    pub year_quarter: String, // e.g. 2024Q2
    pub quarter_start_date: NaiveDate,
    pub quarter_end_date: NaiveDate,

    pub month: u32,
    pub year_month: String, // YYYY-MM
    pub month_start_date: NaiveDate,
    pub month_end_date: NaiveDate,
    pub prev_month: u32,
    pub prev_month_start_date: NaiveDate,
    pub prev_month_end_date: NaiveDate,

    pub week_of_year: u32,
    pub week_identifier: String, // ISO week, e.g. 2025-W01
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub week_of_month: u32,

    pub day_of_year: u32,
    pub day_of_month: u32,
    /// Monday = 1 ... Sunday = 7
    pub day_of_week: u32,
    pub weekday: String,
    pub is_weekend: YesNo,

    pub hour: u32,
    pub shift: Shift,

    pub date_type: DateType,
    pub holiday_name: String,

    pub prev_year_same_date: NaiveDate,
    pub prev_year_date_id: String,
    pub prev_year_date_time: DateTime<FixedOffset>,
    pub prev_year: i32,
    pub prev_year_start_date: NaiveDate,
    pub prev_year_end_date: NaiveDate,
    pub prev_year_month: u32,
    pub prev_year_month_start_date: NaiveDate,
    pub prev_year_month_end_date: NaiveDate,
    pub prev_year_day: u32,
}

impl DateDimensionRecord {
    /// Plain text values in [`DATE_DIMENSION_FIELDS`] order
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.date_id.clone(),
            self.date_hour_id.clone(),
            self.date_time.to_rfc3339(),
            self.year.to_string(),
            self.year_start_date.to_string(),
            self.year_end_date.to_string(),
            self.quarter.to_string(),
            self.year_quarter.clone(),
            self.quarter_start_date.to_string(),
            self.quarter_end_date.to_string(),
            self.month.to_string(),
            self.year_month.clone(),
            self.month_start_date.to_string(),
            self.month_end_date.to_string(),
            self.prev_month.to_string(),
            self.prev_month_start_date.to_string(),
            self.prev_month_end_date.to_string(),
            self.week_of_year.to_string(),
            self.week_identifier.clone(),
            self.week_start_date.to_string(),
            self.week_end_date.to_string(),
            self.week_of_month.to_string(),
            self.day_of_year.to_string(),
            self.day_of_month.to_string(),
            self.day_of_week.to_string(),
            self.weekday.clone(),
            self.is_weekend.to_string(),
            self.hour.to_string(),
            self.shift.to_string(),
            self.date_type.to_string(),
            self.holiday_name.clone(),
            self.prev_year_same_date.to_string(),
            self.prev_year_date_id.clone(),
            self.prev_year_date_time.to_rfc3339(),
            self.prev_year.to_string(),
            self.prev_year_start_date.to_string(),
            self.prev_year_end_date.to_string(),
            self.prev_year_month.to_string(),
            self.prev_year_month_start_date.to_string(),
            self.prev_year_month_end_date.to_string(),
            self.prev_year_day.to_string(),
        ]
    }
}
