// sheet.rs
use crate::source::{parse_sheet_csv, RecordSource, SheetLoad, SourceError};
use rand::Rng;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("property_map/", env!("CARGO_PKG_VERSION"));

const MAX_ATTEMPTS: u64 = 5;
const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_SECS: u64 = 2;

/// A Google Sheet fetched through its CSV export.
pub struct GoogleSheetSource {
    client: Client,
    export_url: Url,
}

impl GoogleSheetSource {
    pub fn new(sheet_ref: &str, timeout: Duration) -> Result<Self, SourceError> {
        let export_url = export_url_for(sheet_ref)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { client, export_url })
    }

    fn fetch_csv(&self) -> Result<String, SourceError> {
        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let start = Instant::now();

            match self.try_fetch_csv() {
                Ok(body) => {
                    tracing::debug!(attempt, elapsed = ?start.elapsed(), "sheet fetched");
                    return Ok(body);
                }
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    tracing::warn!(attempt, elapsed = ?start.elapsed(), error = %e, "sheet fetch failed, retrying");
                    last_err = Some(e);

                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| SourceError::Network("sheet retry loop failed".into())))
    }

    fn try_fetch_csv(&self) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(self.export_url.clone())
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        // A sheet that isn't shared publicly answers 200 with the login page.
        if text.trim_start().starts_with('<') {
            return Err(SourceError::Csv(
                "expected CSV but got HTML; is the sheet shared publicly?".into(),
            ));
        }

        Ok(text)
    }
}

impl RecordSource for GoogleSheetSource {
    fn describe(&self) -> String {
        self.export_url.to_string()
    }

    fn fetch(&self) -> Result<SheetLoad, SourceError> {
        let body = self.fetch_csv()?;
        parse_sheet_csv(body.as_bytes())
    }
}

/// Turns whatever the operator pasted (sheet URL, published link or bare key)
/// into a CSV download URL.
pub fn export_url_for(sheet_ref: &str) -> Result<Url, SourceError> {
    let sheet_ref = sheet_ref.trim();

    let Ok(url) = Url::parse(sheet_ref) else {
        let is_key = !sheet_ref.is_empty()
            && sheet_ref
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_key {
            return Err(SourceError::Config(format!(
                "not a sheet URL or key: {sheet_ref:?}"
            )));
        }
        return export_url_from_key(sheet_ref);
    };

    if url.host_str() != Some("docs.google.com") {
        return Ok(url);
    }

    let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
    match segments.as_slice() {
        ["spreadsheets", "d", "e", key, ..] => {
            let published = format!("https://docs.google.com/spreadsheets/d/e/{key}/pub?output=csv");
            Url::parse(&published).map_err(|e| SourceError::Config(e.to_string()))
        }
        ["spreadsheets", "d", key, ..] => export_url_from_key(key),
        _ => Err(SourceError::Config(format!(
            "unrecognised Google Sheets URL: {url}"
        ))),
    }
}

fn export_url_from_key(key: &str) -> Result<Url, SourceError> {
    let export = format!("https://docs.google.com/spreadsheets/d/{key}/export?format=csv");
    Url::parse(&export).map_err(|e| SourceError::Config(e.to_string()))
}

/// A CSV file on disk, for offline work and demos.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<SheetLoad, SourceError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;
        parse_sheet_csv(file)
    }
}
