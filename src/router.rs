use crate::domain::filter_by_ids;
use crate::errors::ServerError;
use crate::map::{ClickTarget, MapError, MarkerId, ViewId, ViewRegistry};
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates::{pages, sidebar_fragment};
use astra::Request;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => map_page(&req, state),
        ("POST", "/reload") => {
            state.reload()?;
            redirect_response("/")
        }
        _ => match view_route(path) {
            Some((view_id, route)) => {
                let view_id = ViewId(parse_id(view_id, "view")?);
                handle_view(method, route, view_id, state)
            }
            None => Err(ServerError::NotFound),
        },
    }
}

/// Events and data for the map view one page load created.
fn handle_view(method: &str, route: &str, id: ViewId, state: &AppState) -> ResultResp {
    let mut views = state.views()?;

    match (method, route) {
        ("GET", "markers.json") => {
            let view = views.get(id).ok_or(MapError::UnknownView(id))?;
            let markers: Vec<_> = view.surface().markers().collect();
            json_response(&markers)
        }
        ("GET", "sidebar") => {
            let view = views.get(id).ok_or(MapError::UnknownView(id))?;
            html_response(sidebar_fragment(&view.state().sidebar))
        }
        ("POST", "map/click") => click(&mut views, id, ClickTarget::Background),
        ("POST", _) => match marker_click_id(route) {
            Some(marker) => {
                let marker = MarkerId(parse_id(marker, "marker")?);
                click(&mut views, id, ClickTarget::Marker(marker))
            }
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

/// Filters the loaded rows by the page URL and renders them in a new map view.
fn map_page(req: &Request, state: &AppState) -> ResultResp {
    let page_url = req.uri().to_string();

    let sheet = state.sheet()?;
    let shown = filter_by_ids(&sheet.records, &page_url);

    let mut views = state.views()?;
    let (view_id, view) = views.open();
    view.refresh(&shown);

    tracing::debug!(
        url = %page_url,
        view = view_id.0,
        shown = shown.len(),
        total = sheet.records.len(),
        "map page"
    );

    let vm = pages::MapPageVm {
        view_id,
        settings: &state.settings,
        markers: view.surface().markers().collect(),
        sidebar: &view.state().sidebar,
        total_records: sheet.records.len(),
        rejected_rows: sheet.rejected.len(),
        loaded_at: sheet.loaded_at,
    };
    html_response(pages::map_page(&vm))
}

fn click(views: &mut ViewRegistry, id: ViewId, target: ClickTarget) -> ResultResp {
    let view = views.get_mut(id).ok_or(MapError::UnknownView(id))?;
    view.click(target)?;
    html_response(sidebar_fragment(&view.state().sidebar))
}

/// `/views/{id}/rest` -> (`{id}`, `rest`)
fn view_route(path: &str) -> Option<(&str, &str)> {
    path.strip_prefix("/views/")?.split_once('/')
}

/// `markers/{id}/click` -> `{id}`
fn marker_click_id(route: &str) -> Option<&str> {
    route.strip_prefix("markers/")?.strip_suffix("/click")
}

fn parse_id(raw: &str, what: &str) -> Result<u64, ServerError> {
    raw.parse::<u64>()
        .map_err(|_| ServerError::BadRequest(format!("Invalid {what} id: {raw:?}")))
}
