// templates/pages/map.rs
use crate::config::{Basemap, MapSettings};
use crate::map::{CanvasMarker, ViewId};
use crate::sidebar::{Sidebar, BODY_ID, PANEL_ID};
use crate::templates::components::sidebar_shell;
use crate::templates::map_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

pub struct MapPageVm<'a> {
    pub view_id: ViewId,
    pub settings: &'a MapSettings,
    pub markers: Vec<&'a CanvasMarker>,
    pub sidebar: &'a Sidebar,
    pub total_records: usize,
    pub rejected_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// What the browser script needs to draw the map.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    view_id: ViewId,
    center: [f64; 2],
    zoom: u8,
    basemap: &'a Basemap,
    panel_id: &'static str,
    sidebar_body_id: &'static str,
    markers: &'a [&'a CanvasMarker],
}

// Marker clicks and background clicks are forwarded to this page's view on
// the server, which owns the sidebar state and answers with the new sidebar
// body.
const MAP_SCRIPT: &str = r##"
(function () {
  var cfg = JSON.parse(document.getElementById("map-config").textContent);
  var map = L.map("map").setView(cfg.center, cfg.zoom);

  L.tileLayer(cfg.basemap.url, {
    attribution: cfg.basemap.attribution,
    subdomains: cfg.basemap.subdomains,
    maxZoom: cfg.basemap.maxZoom
  }).addTo(map);

  var sidebar = L.control
    .sidebar({ container: "sidebar", closeButton: true, position: "right" })
    .addTo(map);

  var viewUrl = "/views/" + cfg.viewId;

  function send(route) {
    return htmx.ajax("POST", viewUrl + route, { target: "#" + cfg.sidebarBodyId, swap: "outerHTML" });
  }

  map.on("click", function () {
    send("/map/click");
    sidebar.close(cfg.panelId);
  });

  var group = L.layerGroup().addTo(map);
  cfg.markers.forEach(function (m) {
    var marker = L.marker([m.lat, m.lng]).addTo(group);
    if (m.icon) {
      marker.setIcon(L.AwesomeMarkers.icon(m.icon));
    }
    marker.on("click", function (e) {
      L.DomEvent.stopPropagation(e);
      send("/markers/" + m.id + "/click").then(function () {
        sidebar.open(cfg.panelId);
      });
    });
  });
})();
"##;

pub fn map_page(vm: &MapPageVm) -> Markup {
    let config = ClientConfig {
        view_id: vm.view_id,
        center: [vm.settings.center.0, vm.settings.center.1],
        zoom: vm.settings.zoom,
        basemap: &vm.settings.basemap,
        panel_id: PANEL_ID,
        sidebar_body_id: BODY_ID,
        markers: &vm.markers,
    };
    // Keep "</script>" in sheet data from closing the tag early.
    let config_json = serde_json::to_string(&config)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    map_layout(
        "Properties",
        html! {
            (sidebar_shell(vm.sidebar))
            div id="map" class="sidebar-map" data-view-id=(vm.view_id.0) {}
            (map_footer(vm))
            script type="application/json" id="map-config" { (PreEscaped(config_json)) }
            script { (PreEscaped(MAP_SCRIPT)) }
        },
    )
}

fn map_footer(vm: &MapPageVm) -> Markup {
    html! {
        div id="map-footer" {
            "Showing " span id="shown-count" { (vm.markers.len()) }
            " of " (vm.total_records) " properties"
            " · updated " (vm.loaded_at.format("%Y-%m-%d %H:%M UTC").to_string())
            @if vm.rejected_rows > 0 {
                " · " span class="rejected" { (vm.rejected_rows) " rows skipped" }
            }
        }
    }
}
