// map/surface.rs
use crate::domain::MarkerColor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LayerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MarkerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Icon settings handed to Leaflet.awesome-markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub marker_color: MarkerColor,
    pub prefix: &'static str,
    pub extra_classes: &'static str,
}

impl MarkerIcon {
    pub fn info(marker_color: MarkerColor) -> Self {
        Self {
            icon: "info-sign",
            icon_color: "white",
            marker_color,
            prefix: "glyphicon",
            extra_classes: "fa-rotate-0",
        }
    }
}

/// The drawing primitives the map view needs from a map.
pub trait MapSurface {
    /// Creates an empty layer group already attached to the map.
    fn add_layer(&mut self) -> LayerId;

    /// Detaches a layer group and every marker in it.
    fn remove_layer(&mut self, layer: LayerId);

    fn place_marker(&mut self, layer: LayerId, at: LatLng) -> MarkerId;

    fn set_icon(&mut self, marker: MarkerId, icon: MarkerIcon);
}
