mod rows;
mod sheet;
mod source_error;

pub use rows::{parse_sheet_csv, SheetLoad};
pub use sheet::{CsvFileSource, GoogleSheetSource};
pub use source_error::SourceError;

/// Where the property rows come from.
///
/// One blocking call per load; retries and timeouts are the source's business.
pub trait RecordSource: Send + Sync {
    /// Human readable location, for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<SheetLoad, SourceError>;
}
