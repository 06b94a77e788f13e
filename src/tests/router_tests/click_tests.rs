// src/tests/router_tests/click_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::sidebar::SidebarPanel;
use crate::state::AppState;
use crate::tests::utils::{body_string, load_page, loaded_state, request, text_of, LoadedPage};
use scraper::{Html, Selector};

fn post(state: &AppState, uri: &str) -> Html {
    let mut resp = handle(request("POST", uri), state).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_fragment(&body_string(&mut resp))
}

fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).collect()
}

fn panel(state: &AppState, page: &LoadedPage) -> SidebarPanel {
    state
        .views()
        .unwrap()
        .get(page.view_id())
        .unwrap()
        .panel()
        .clone()
}

#[test]
fn marker_click_fills_title_and_slots() {
    let state = loaded_state();
    let page = load_page(&state, "/");

    let fragment = post(&state, &page.marker_click_url(0));

    assert_eq!(text_of(&fragment, "#sidebar-title"), "R 1 950 000");
    assert_eq!(text_of(&fragment, "#display-address"), "3 Lyme Road");

    let pgp = select_all(&fragment, "a#link-to-pgp");
    assert_eq!(pgp[0].value().attr("href"), Some("https://pgp.example/101"));
    assert_eq!(pgp[0].value().attr("class"), Some("link-button"));

    let maps = select_all(&fragment, "a#link-to-google-maps");
    assert_eq!(maps[0].value().attr("href"), Some("https://maps.example/101"));
}

#[test]
fn repeated_clicks_keep_one_set_of_slots() {
    let state = loaded_state();
    let page = load_page(&state, "/");

    post(&state, &page.marker_click_url(0));
    let fragment = post(&state, &page.marker_click_url(1));

    assert_eq!(select_all(&fragment, "#div-container > *").len(), 3);
    assert_eq!(select_all(&fragment, "#display-address").len(), 1);
    assert_eq!(text_of(&fragment, "#display-address"), "Erf 88 Harbour Rd");
}

#[test]
fn background_click_closes_the_panel() {
    let state = loaded_state();
    let page = load_page(&state, "/");

    post(&state, &page.marker_click_url(2));
    assert!(panel(&state, &page).is_open());

    post(&state, &page.url("map/click"));
    assert_eq!(panel(&state, &page), SidebarPanel::Closed);

    post(&state, &page.url("map/click"));
    assert_eq!(panel(&state, &page), SidebarPanel::Closed);
}

#[test]
fn sidebar_route_returns_current_fragment() {
    let state = loaded_state();
    let page = load_page(&state, "/");
    post(&state, &page.marker_click_url(1));

    let mut resp = handle(request("GET", &page.url("sidebar")), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("R 450 000"), "{body}");
}

#[test]
fn new_page_load_starts_closed_after_a_click() {
    let state = loaded_state();
    let first = load_page(&state, "/");
    post(&state, &first.marker_click_url(1));

    let second = load_page(&state, "/?ids=101");

    let sidebar = select_all(&second.doc, "div#sidebar");
    let class = sidebar[0].value().attr("class").unwrap();
    assert!(class.split_whitespace().any(|c| c == "collapsed"), "{class}");
    assert_eq!(text_of(&second.doc, "h2#sidebar-title"), "No property selected");
    assert!(select_all(&second.doc, "#display-address").is_empty());
    assert_eq!(panel(&state, &second), SidebarPanel::Closed);
}

#[test]
fn two_page_loads_click_their_own_markers() {
    let state = loaded_state();
    let a = load_page(&state, "/");
    let b = load_page(&state, "/?ids=102");

    let fragment = post(&state, &a.marker_click_url(0));
    assert_eq!(text_of(&fragment, "#sidebar-title"), "R 1 950 000");

    let fragment = post(&state, &b.marker_click_url(0));
    assert_eq!(text_of(&fragment, "#sidebar-title"), "R 450 000");

    let mut resp = handle(request("GET", &a.url("sidebar")), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("R 1 950 000"), "{body}");

    post(&state, &b.url("map/click"));
    assert!(panel(&state, &a).is_open());
    assert_eq!(panel(&state, &b), SidebarPanel::Closed);
}

#[test]
fn evicted_views_are_not_found() {
    let state = loaded_state().with_max_views(1);
    let old = load_page(&state, "/");
    let current = load_page(&state, "/");

    assert!(matches!(
        handle(request("POST", &old.marker_click_url(0)), &state),
        Err(ServerError::NotFound)
    ));
    post(&state, &current.marker_click_url(0));
}

#[test]
fn unknown_or_bad_ids_are_rejected() {
    let state = loaded_state();
    let page = load_page(&state, "/");

    assert!(matches!(
        handle(request("POST", &page.url("markers/999/click")), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request("POST", &page.url("markers/abc/click")), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(request("POST", "/views/abc/map/click"), &state),
        Err(ServerError::BadRequest(_))
    ));
}
