// src/tests/router_tests/map_page_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::tests::utils::{body_string, load_page, loaded_state, request, text_of, LoadedPage};
use scraper::Selector;
use serde_json::Value;

fn page(uri: &str) -> LoadedPage {
    load_page(&loaded_state(), uri)
}

#[test]
fn map_page_places_every_valid_row() {
    let config = page("/").config;

    let markers = config["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0]["lat"], -34.1751);
    assert_eq!(markers[1]["icon"]["markerColor"], "blue");
    assert_eq!(markers[2]["icon"]["markerColor"], "green");

    assert_eq!(config["center"], serde_json::json!([-34.175, 24.83]));
    assert_eq!(config["zoom"], 13);
}

#[test]
fn map_page_has_the_fixed_dom_slots() {
    let doc = page("/").doc;

    assert_eq!(text_of(&doc, "h2#sidebar-title"), "No property selected");
    for css in ["div#map", "div#sidebar", "div#my-info-panel", "#sidebar-content"] {
        let selector = Selector::parse(css).unwrap();
        assert!(doc.select(&selector).next().is_some(), "{css} missing");
    }
}

#[test]
fn each_page_load_gets_its_own_view() {
    let state = loaded_state();
    let first = load_page(&state, "/");
    let second = load_page(&state, "/");

    assert_ne!(first.view_id(), second.view_id());

    let selector = Selector::parse("div#map").unwrap();
    let map = second.doc.select(&selector).next().unwrap();
    assert_eq!(
        map.value().attr("data-view-id"),
        Some(second.view_id().0.to_string().as_str())
    );
}

#[test]
fn footer_reports_shown_total_and_skipped_rows() {
    let doc = page("/?ids=101").doc;

    assert_eq!(text_of(&doc, "#shown-count"), "1");
    let footer = text_of(&doc, "#map-footer");
    assert!(footer.contains("of 3 properties"), "{footer}");
    assert!(footer.contains("1 rows skipped"), "{footer}");
}

#[test]
fn id_filter_limits_markers() {
    let config = page("/?ids=103,101,999").config;

    let lats: Vec<_> = config["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["lat"].as_f64().unwrap())
        .collect();
    assert_eq!(lats, vec![-34.1751, -34.1720]);
}

#[test]
fn malformed_filter_shows_everything() {
    let config = page("/?ids").config;
    assert_eq!(config["markers"].as_array().unwrap().len(), 3);
}

#[test]
fn markers_json_matches_its_page_load() {
    let state = loaded_state();
    let filtered = load_page(&state, "/?ids=102");
    load_page(&state, "/");

    let mut resp = handle(request("GET", &filtered.url("markers.json")), &state).unwrap();
    let markers: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();

    let markers = markers.as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["lng"], 24.84);
    assert_eq!(markers[0]["icon"]["markerColor"], "blue");
}

#[test]
fn unknown_routes_are_not_found() {
    let state = loaded_state();
    let page = load_page(&state, "/");

    assert!(matches!(
        handle(request("GET", "/admin"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request("POST", "/markers/1/click"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request("POST", &page.url("markers/1/delete")), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request("GET", "/views/999/markers.json"), &state),
        Err(ServerError::NotFound)
    ));
}
