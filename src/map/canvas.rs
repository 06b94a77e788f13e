// map/canvas.rs
use crate::map::surface::{LatLng, LayerId, MapSurface, MarkerIcon, MarkerId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CanvasMarker {
    pub id: MarkerId,
    #[serde(flatten)]
    pub position: LatLng,
    pub icon: Option<MarkerIcon>,
}

/// The server-side map: what is on it gets shipped to the browser as JSON.
///
/// Ids are never reused, so a marker id from an older page can't hit a
/// marker placed by a later refresh.
#[derive(Debug, Default)]
pub struct MapCanvas {
    next_id: u64,
    layers: BTreeMap<LayerId, Vec<MarkerId>>,
    markers: BTreeMap<MarkerId, CanvasMarker>,
}

impl MapCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    #[cfg(test)]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[cfg(test)]
    pub fn marker(&self, id: MarkerId) -> Option<&CanvasMarker> {
        self.markers.get(&id)
    }

    /// All markers on the map, in placement order.
    pub fn markers(&self) -> impl Iterator<Item = &CanvasMarker> {
        self.markers.values()
    }
}

impl MapSurface for MapCanvas {
    fn add_layer(&mut self) -> LayerId {
        let id = LayerId(self.next());
        self.layers.insert(id, Vec::new());
        id
    }

    fn remove_layer(&mut self, layer: LayerId) {
        if let Some(ids) = self.layers.remove(&layer) {
            for id in ids {
                self.markers.remove(&id);
            }
        }
    }

    fn place_marker(&mut self, layer: LayerId, at: LatLng) -> MarkerId {
        let id = MarkerId(self.next());
        self.layers.entry(layer).or_default().push(id);
        self.markers.insert(
            id,
            CanvasMarker {
                id,
                position: at,
                icon: None,
            },
        );
        id
    }

    fn set_icon(&mut self, marker: MarkerId, icon: MarkerIcon) {
        if let Some(m) = self.markers.get_mut(&marker) {
            m.icon = Some(icon);
        }
    }
}
