// src/domain/record.rs

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// One spreadsheet row exactly as the sheet delivers it.
/// Every column is optional here; `Record::from_row` decides what is required.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SheetRow {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub link_to_pgp: Option<String>,
    pub link_to_google_maps: Option<String>,
    pub primary_id: Option<String>,
}

/// A validated property row, ready to be placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub primary_id: String,
    pub lat: f64,
    pub lon: f64,
    pub price: String,
    pub address: String,
    pub property_type: String,
    pub link_to_pgp: String,
    pub link_to_google_maps: String,
}

/// The part of a record a marker carries around for the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordProperties {
    pub price: String,
    pub address: String,
    pub link_to_pgp: String,
    pub link_to_google_maps: String,
}

/// A sheet row that cannot become a marker.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedRecordError {
    MissingField { row: usize, field: &'static str },
    BadCoordinate { row: usize, field: &'static str, value: String },
}

impl fmt::Display for MalformedRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRecordError::MissingField { row, field } => {
                write!(f, "Row {row}: missing required field '{field}'")
            }
            MalformedRecordError::BadCoordinate { row, field, value } => {
                write!(f, "Row {row}: '{field}' is not a usable coordinate ({value:?})")
            }
        }
    }
}

impl Error for MalformedRecordError {}

impl Record {
    /// Validates a raw sheet row. `row` is the 1-based data row number, used in errors.
    ///
    /// Coordinates must parse as finite numbers inside the WGS84 range. The id
    /// must be present; the display fields may be blank, the sheet often
    /// leaves price or links empty for unlisted plots.
    pub fn from_row(row: usize, raw: &SheetRow) -> Result<Self, MalformedRecordError> {
        let primary_id = required(row, "primary_id", &raw.primary_id)?.to_string();
        let lat = coordinate(row, "lat", &raw.lat, 90.0)?;
        let lon = coordinate(row, "lon", &raw.lon, 180.0)?;

        let text = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_string();

        Ok(Record {
            primary_id,
            lat,
            lon,
            price: text(&raw.price),
            address: text(&raw.address),
            property_type: text(&raw.property_type),
            link_to_pgp: text(&raw.link_to_pgp),
            link_to_google_maps: text(&raw.link_to_google_maps),
        })
    }

    pub fn properties(&self) -> RecordProperties {
        RecordProperties {
            price: self.price.clone(),
            address: self.address.clone(),
            link_to_pgp: self.link_to_pgp.clone(),
            link_to_google_maps: self.link_to_google_maps.clone(),
        }
    }
}

fn required<'a>(
    row: usize,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, MalformedRecordError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(MalformedRecordError::MissingField { row, field })
}

fn coordinate(
    row: usize,
    field: &'static str,
    value: &Option<String>,
    limit: f64,
) -> Result<f64, MalformedRecordError> {
    let text = required(row, field, value)?;
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
        .ok_or_else(|| MalformedRecordError::BadCoordinate {
            row,
            field,
            value: text.to_string(),
        })
}
