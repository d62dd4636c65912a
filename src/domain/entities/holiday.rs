use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One day listed in a yearly holiday document.
///
/// `is_off_day` is false for compensatory working days that sit inside a
/// holiday period (weekend makeup days).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub name: String,
    #[serde(rename = "date")]
    pub civil_date: NaiveDate,
    #[serde(rename = "isOffDay")]
    pub is_off_day: bool,
}

impl HolidayRecord {
    pub fn new(name: impl Into<String>, civil_date: NaiveDate, is_off_day: bool) -> Self {
        Self {
            name: name.into(),
            civil_date,
            is_off_day,
        }
    }

    /// Cache key used by the holiday lookup (`YYYY-MM-DD`)
    pub fn date_key(&self) -> String {
        self.civil_date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Raw entry as it appears in a holiday document
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    #[serde(rename = "isOffDay")]
    pub is_off_day: bool,
}

/// One year's holiday document: `{"year": 2024, "papers": [...], "days": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub papers: Vec<String>,
    pub days: Vec<HolidayEntry>,
}

impl HolidayFile {
    /// Parse a document for `year`. Any schema violation fails the whole load.
    pub fn parse(year: i32, content: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(content).map_err(|e| DomainError::MalformedHolidayData {
            year,
            reason: e.to_string(),
        })
    }

    pub fn into_records(self, year: i32) -> DomainResult<Vec<HolidayRecord>> {
        if let Some(declared) = self.year {
            if declared != year {
                return Err(DomainError::MalformedHolidayData {
                    year,
                    reason: format!("document declares year {}", declared),
                });
            }
        }

        self.days
            .into_iter()
            .map(|entry| {
                let civil_date = NaiveDate::parse_from_str(&entry.date, ISO_DATE_FORMAT)
                    .map_err(|e| DomainError::MalformedHolidayData {
                        year,
                        reason: format!("invalid date {:?} for {}: {}", entry.date, entry.name, e),
                    })?;
                Ok(HolidayRecord::new(entry.name, civil_date, entry.is_off_day))
            })
            .collect()
    }
}
