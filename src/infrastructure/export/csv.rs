//! CSV rendering of date dimension rows.
//!
//! The header is the static column list of the record; every value is
//! written in its plain text form.

use crate::domain::entities::{DateDimensionRecord, DATE_DIMENSION_FIELDS};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

fn encode<I, R, F>(rows: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Header line only
pub fn header() -> Result<Vec<u8>, csv::Error> {
    encode([DATE_DIMENSION_FIELDS])
}

/// Data lines for `records`, without header
pub fn rows(records: &[DateDimensionRecord]) -> Result<Vec<u8>, csv::Error> {
    encode(records.iter().map(DateDimensionRecord::to_row))
}

/// Complete document: header followed by one line per record
pub fn to_csv(records: &[DateDimensionRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut document = header()?;
    document.extend(rows(records)?);
    Ok(document)
}
