// config.rs
use crate::map::DEFAULT_MAX_VIEWS;
use serde::Serialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// The St Francis Bay listings sheet the map was built for.
pub const DEFAULT_SHEET: &str =
    "https://docs.google.com/spreadsheets/d/1jBndsqchkcmiYXSIMU6U72jIQG5FId7mVMbrHJitAlI/edit?usp=sharing";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_CENTER: (f64, f64) = (-34.175, 24.83);
const DEFAULT_ZOOM: u8 = 13;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Sheet(String),
    CsvFile(PathBuf),
}

/// Carto Positron, the light basemap the listings have always used.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basemap {
    pub url: String,
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
}

impl Default for Basemap {
    fn default() -> Self {
        Self {
            url: "https://cartodb-basemaps-{s}.global.ssl.fastly.net/light_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            attribution: "&copy; <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> \
                 &copy; <a href='http://cartodb.com/attributions'>CartoDB</a>"
                .to_string(),
            subdomains: "abcd".to_string(),
            max_zoom: 19,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapSettings {
    pub center: (f64, f64),
    pub zoom: u8,
    pub basemap: Basemap,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            basemap: Basemap::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub workers: usize,
    pub source: SourceConfig,
    pub fetch_timeout: Duration,
    pub map: MapSettings,
    /// Page loads whose map view is kept for clicks.
    pub max_views: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr = get("PROPERTY_MAP_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError(format!("PROPERTY_MAP_ADDR: {e}")))?;

        let workers = match get("PROPERTY_MAP_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError(format!("PROPERTY_MAP_WORKERS: {v:?} is not a positive number")))?,
            None => DEFAULT_WORKERS,
        };

        let source = match (get("PROPERTY_MAP_CSV_PATH"), get("PROPERTY_MAP_SHEET")) {
            (Some(path), _) => SourceConfig::CsvFile(PathBuf::from(path)),
            (None, Some(sheet)) => SourceConfig::Sheet(sheet),
            (None, None) => SourceConfig::Sheet(DEFAULT_SHEET.to_string()),
        };

        let fetch_timeout = match get("PROPERTY_MAP_FETCH_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse()
                    .map_err(|e| ConfigError(format!("PROPERTY_MAP_FETCH_TIMEOUT_SECS: {e}")))?,
            ),
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let max_views = match get("PROPERTY_MAP_MAX_VIEWS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError(format!("PROPERTY_MAP_MAX_VIEWS: {v:?} is not a positive number")))?,
            None => DEFAULT_MAX_VIEWS,
        };

        let mut map = MapSettings::default();
        if let Some(center) = get("PROPERTY_MAP_CENTER") {
            map.center = parse_center(&center)?;
        }
        if let Some(zoom) = get("PROPERTY_MAP_ZOOM") {
            map.zoom = zoom
                .parse::<u8>()
                .ok()
                .filter(|z| *z <= map.basemap.max_zoom)
                .ok_or_else(|| ConfigError(format!("PROPERTY_MAP_ZOOM: {zoom:?}")))?;
        }

        Ok(Self {
            addr,
            workers,
            source,
            fetch_timeout,
            map,
            max_views,
        })
    }
}

/// `"lat,lon"`, e.g. `"-34.175,24.83"`.
fn parse_center(value: &str) -> Result<(f64, f64), ConfigError> {
    let err = || ConfigError(format!("PROPERTY_MAP_CENTER: expected \"lat,lon\", got {value:?}"));

    let (lat, lon) = value.split_once(',').ok_or_else(err)?;
    let lat: f64 = lat.trim().parse().map_err(|_| err())?;
    let lon: f64 = lon.trim().parse().map_err(|_| err())?;

    if lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(err());
    }
    Ok((lat, lon))
}
