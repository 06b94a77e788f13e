// state.rs
use crate::config::{AppConfig, MapSettings, SourceConfig};
use crate::errors::ServerError;
use crate::map::ViewRegistry;
use crate::source::{CsvFileSource, GoogleSheetSource, RecordSource, SheetLoad, SourceError};
use std::sync::{Mutex, MutexGuard};

/// Shared by every worker: the loaded sheet and the map view of each recent
/// page load.
///
/// Handlers hold a lock for their whole run, so a refresh or a click is
/// never observed half done. When both are needed, `sheet` is locked first.
pub struct AppState {
    pub settings: MapSettings,
    source: Box<dyn RecordSource>,
    sheet: Mutex<SheetLoad>,
    views: Mutex<ViewRegistry>,
}

impl AppState {
    pub fn new(settings: MapSettings, source: Box<dyn RecordSource>) -> Self {
        Self {
            settings,
            source,
            sheet: Mutex::new(SheetLoad::empty()),
            views: Mutex::new(ViewRegistry::default()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let source: Box<dyn RecordSource> = match &config.source {
            SourceConfig::Sheet(sheet) => {
                Box::new(GoogleSheetSource::new(sheet, config.fetch_timeout)?)
            }
            SourceConfig::CsvFile(path) => Box::new(CsvFileSource::new(path)),
        };
        Ok(Self::new(config.map.clone(), source).with_max_views(config.max_views))
    }

    /// Caps how many page loads keep a clickable map view.
    pub fn with_max_views(self, max_views: usize) -> Self {
        Self {
            views: Mutex::new(ViewRegistry::new(max_views)),
            ..self
        }
    }

    /// Fetches the sheet and swaps it in. On failure the previous rows stay.
    pub fn reload(&self) -> Result<usize, ServerError> {
        let load = self.source.fetch()?;
        let count = load.records.len();

        tracing::info!(
            source = %self.source.describe(),
            records = count,
            rejected = load.rejected.len(),
            "sheet loaded"
        );

        *self.sheet()? = load;
        Ok(count)
    }

    pub fn sheet(&self) -> Result<MutexGuard<'_, SheetLoad>, ServerError> {
        self.sheet.lock().map_err(|_| ServerError::InternalError)
    }

    pub fn views(&self) -> Result<MutexGuard<'_, ViewRegistry>, ServerError> {
        self.views.lock().map_err(|_| ServerError::InternalError)
    }
}
