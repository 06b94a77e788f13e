pub mod color;
pub mod filter;
pub mod record;

pub use color::{color_for, MarkerColor};
pub use filter::filter_by_ids;
pub use record::{MalformedRecordError, Record, RecordProperties, SheetRow};
