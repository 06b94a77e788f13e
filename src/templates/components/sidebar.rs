// templates/components/sidebar.rs
use crate::sidebar::{Sidebar, PANEL_ID};
use maud::{html, Markup, Render};

/// The swappable part of the sidebar: title and content slots.
pub fn sidebar_fragment(sidebar: &Sidebar) -> Markup {
    sidebar.document().render()
}

/// leaflet-sidebar-v2 container with the one info panel.
pub fn sidebar_shell(sidebar: &Sidebar) -> Markup {
    let collapsed = if sidebar.panel().is_open() { "" } else { " collapsed" };

    html! {
        div id="sidebar" class={ "leaflet-sidebar" (collapsed) } {
            div class="leaflet-sidebar-tabs" {
                ul role="tablist" {
                    li { a href={ "#" (PANEL_ID) } role="tab" { i class="fa fa-bars active" {} } }
                }
            }
            div class="leaflet-sidebar-content" {
                div class="leaflet-sidebar-pane" id=(PANEL_ID) {
                    h1 class="leaflet-sidebar-header" {
                        "Property"
                        span class="leaflet-sidebar-close" { i class="fa fa-caret-right" {} }
                    }
                    (sidebar_fragment(sidebar))
                }
            }
        }
    }
}
