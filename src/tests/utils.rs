use crate::config::MapSettings;
use crate::handle;
use crate::map::ViewId;
use crate::source::{parse_sheet_csv, RecordSource, SheetLoad, SourceError};
use crate::state::AppState;
use astra::{Body, Request, Response};
use scraper::{Html, Selector};
use serde_json::Value;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const LISTINGS_CSV: &str = "\
primary_id,lat,lon,price,address,property_type,link_to_pgp,link_to_google_maps
101,-34.1751,24.8302,R 1 950 000,3 Lyme Road,house,https://pgp.example/101,https://maps.example/101
102,-34.1800,24.8400,R 450 000,Erf 88 Harbour Rd,plot,https://pgp.example/102,https://maps.example/102
103,-34.1720,24.8350,R 2 300 000,7 Da Gama Cres,house,https://pgp.example/103,https://maps.example/103
104,not-a-lat,24.8350,R 1,Broken row,house,,
";

/// Serves a fixed CSV; each fetch can be told to fail.
pub struct StaticSource {
    csv: &'static str,
    fail_from_fetch: Option<usize>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(csv: &'static str) -> Self {
        Self {
            csv,
            fail_from_fetch: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Succeeds `n` times, then fails every fetch.
    pub fn failing_after(csv: &'static str, n: usize) -> Self {
        Self {
            fail_from_fetch: Some(n),
            ..Self::new(csv)
        }
    }
}

impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        "static test sheet".to_string()
    }

    fn fetch(&self) -> Result<SheetLoad, SourceError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_from_fetch.is_some_and(|limit| n >= limit) {
            return Err(SourceError::Network("connection reset".into()));
        }
        parse_sheet_csv(self.csv.as_bytes())
    }
}

/// App state with the test listings already loaded.
pub fn loaded_state() -> AppState {
    let state = AppState::new(MapSettings::default(), Box::new(StaticSource::new(LISTINGS_CSV)));
    state.reload().unwrap();
    state
}

pub fn request(method: &str, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// A rendered map page and the client config embedded in it.
pub struct LoadedPage {
    pub doc: Html,
    pub config: Value,
}

impl LoadedPage {
    pub fn view_id(&self) -> ViewId {
        ViewId(self.config["viewId"].as_u64().unwrap())
    }

    pub fn marker_ids(&self) -> Vec<u64> {
        self.config["markers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_u64().unwrap())
            .collect()
    }

    /// `route` under this page's view, e.g. `"map/click"`.
    pub fn url(&self, route: &str) -> String {
        format!("/views/{}/{route}", self.view_id().0)
    }

    pub fn marker_click_url(&self, index: usize) -> String {
        self.url(&format!("markers/{}/click", self.marker_ids()[index]))
    }
}

pub fn load_page(state: &AppState, uri: &str) -> LoadedPage {
    let mut resp = handle(request("GET", uri), state).unwrap();
    assert_eq!(resp.status(), 200);
    let doc = Html::parse_document(&body_string(&mut resp));
    let config = serde_json::from_str(&text_of(&doc, "script#map-config")).unwrap();
    LoadedPage { doc, config }
}

pub fn text_of(doc: &Html, css: &str) -> String {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("{css} not found"))
        .text()
        .collect()
}
