// source/rows.rs
use crate::domain::{MalformedRecordError, Record, SheetRow};
use crate::source::SourceError;
use chrono::{DateTime, Utc};
use std::io::Read;

/// Result of one fetch: the rows that made it and the rows that didn't.
#[derive(Debug)]
pub struct SheetLoad {
    pub records: Vec<Record>,
    pub rejected: Vec<MalformedRecordError>,
    pub loaded_at: DateTime<Utc>,
}

impl SheetLoad {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
            loaded_at: Utc::now(),
        }
    }
}

/// Header cells as typed in the sheet ("Primary ID", " lat ") mapped to field names.
fn normalize_header(h: &str) -> String {
    h.trim().to_ascii_lowercase().replace(' ', "_")
}

/// Decodes a CSV export into records.
///
/// Structural CSV problems fail the whole load. A row that decodes but does
/// not validate is skipped and kept in `rejected`.
pub fn parse_sheet_csv<R: Read>(reader: R) -> Result<SheetLoad, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = rdr.headers()?.iter().map(normalize_header).collect();
    rdr.set_headers(headers);

    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for (idx, row) in rdr.deserialize::<SheetRow>().enumerate() {
        let row_number = idx + 1;
        let raw = row?;

        match Record::from_row(row_number, &raw) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping sheet row");
                rejected.push(e);
            }
        }
    }

    Ok(SheetLoad {
        records,
        rejected,
        loaded_at: Utc::now(),
    })
}
