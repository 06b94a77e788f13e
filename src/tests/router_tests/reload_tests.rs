// src/tests/router_tests/reload_tests.rs

use crate::config::MapSettings;
use crate::errors::ServerError;
use crate::handle;
use crate::state::AppState;
use crate::tests::utils::{load_page, request, StaticSource, LISTINGS_CSV};

#[test]
fn reload_redirects_back_to_the_map() {
    let state = AppState::new(MapSettings::default(), Box::new(StaticSource::new(LISTINGS_CSV)));
    assert!(state.sheet().unwrap().records.is_empty());

    let resp = handle(request("POST", "/reload"), &state).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/");
    assert_eq!(state.sheet().unwrap().records.len(), 3);
}

#[test]
fn failed_reload_keeps_previous_rows() {
    let state = AppState::new(
        MapSettings::default(),
        Box::new(StaticSource::failing_after(LISTINGS_CSV, 1)),
    );
    state.reload().unwrap();

    let result = handle(request("POST", "/reload"), &state);

    assert!(matches!(result, Err(ServerError::SourceError(_))));
    assert_eq!(state.sheet().unwrap().records.len(), 3);
}

#[test]
fn failed_first_load_still_serves_an_empty_map() {
    let state = AppState::new(
        MapSettings::default(),
        Box::new(StaticSource::failing_after(LISTINGS_CSV, 0)),
    );
    assert!(state.reload().is_err());

    let page = load_page(&state, "/");

    assert!(page.config["markers"].as_array().unwrap().is_empty());
}
