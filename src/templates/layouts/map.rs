use maud::{html, Markup, DOCTYPE};

const LEAFLET: &str = "https://unpkg.com/leaflet@1.9.4/dist";
const SIDEBAR_V2: &str = "https://unpkg.com/leaflet-sidebar-v2@3.2.3";
const AWESOME_MARKERS: &str = "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2";

/// Full-screen map page shell. Pulls the map, sidebar and icon libraries from CDNs.
pub fn map_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href={ (LEAFLET) "/leaflet.css" };
                link rel="stylesheet" href={ (SIDEBAR_V2) "/css/leaflet-sidebar.min.css" };
                link rel="stylesheet" href={ (AWESOME_MARKERS) "/leaflet.awesome-markers.css" };
                link rel="stylesheet" href="https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css";
                link rel="stylesheet" href="https://maxcdn.bootstrapcdn.com/font-awesome/4.7.0/css/font-awesome.min.css";
                style {
                    "html, body { height: 100%; margin: 0; padding: 0; }"
                    "#map { position: absolute; top: 0; bottom: 0; width: 100%; }"
                    ".display-text { font-size: 1.1rem; margin: 1rem 0; }"
                    ".link-button { display: inline-block; margin: 0 .5rem .5rem 0; padding: .4rem .8rem; border-radius: 4px; background: #2a81cb; color: #fff; }"
                    "#map-footer { position: absolute; bottom: 0; left: 0; z-index: 1000; background: rgba(255,255,255,.85); padding: 2px 8px; font-size: 12px; }"
                }
                script src={ (LEAFLET) "/leaflet.js" } {}
                script src={ (SIDEBAR_V2) "/js/leaflet-sidebar.min.js" } {}
                script src={ (AWESOME_MARKERS) "/leaflet.awesome-markers.min.js" } {}
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                (content)
            }
        }
    }
}
