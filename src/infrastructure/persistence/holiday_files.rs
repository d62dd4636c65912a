use crate::domain::entities::{HolidayFile, HolidayRecord};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_source::HolidaySource;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads one `{year}.json` document per calendar year from a data directory
/// (the layout published by the holiday-cn project).
#[derive(Clone, Debug)]
pub struct JsonHolidaySource {
    base_path: PathBuf,
}

impl JsonHolidaySource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn year_path(&self, year: i32) -> PathBuf {
        self.base_path.join(format!("{}.json", year))
    }
}

#[async_trait]
impl HolidaySource for JsonHolidaySource {
    async fn load_year(&self, year: i32) -> DomainResult<Vec<HolidayRecord>> {
        let path = self.year_path(year);

        let content = fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::HolidayDataUnavailable(year),
            _ => DomainError::Internal(format!(
                "Failed to read holiday file {}: {}",
                path.display(),
                e
            )),
        })?;

        let records = HolidayFile::parse(year, &content)?.into_records(year)?;
        tracing::debug!(
            "Loaded {} holiday entries for {} from {}",
            records.len(),
            year,
            path.display()
        );
        Ok(records)
    }
}
