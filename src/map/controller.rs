// map/controller.rs
use crate::domain::{color_for, Record, RecordProperties};
use crate::map::surface::{LatLng, LayerId, MapSurface, MarkerIcon, MarkerId};
use crate::map::MapError;
use crate::sidebar::Sidebar;

/// One marker of the live set and the record details it carries.
#[derive(Debug, Clone)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub properties: RecordProperties,
}

/// The layer group holding the current markers.
#[derive(Debug)]
pub struct MarkerGroup {
    pub layer: LayerId,
    pub markers: Vec<PlacedMarker>,
}

/// Everything the map view mutates in response to events.
#[derive(Debug, Default)]
pub struct MapViewState {
    pub markers: Option<MarkerGroup>,
    pub sidebar: Sidebar,
}

/// What a click handler says about the click it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Marker(MarkerId),
    Background,
}

/// Owns the map surface and the view state, and answers map events.
pub struct MapViewController<S: MapSurface> {
    surface: S,
    state: MapViewState,
}

impl<S: MapSurface> MapViewController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: MapViewState::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &MapViewState {
        &self.state
    }

    #[cfg(test)]
    pub fn panel(&self) -> &crate::sidebar::SidebarPanel {
        self.state.sidebar.panel()
    }

    /// The markers currently on the map, in record order.
    pub fn markers(&self) -> &[PlacedMarker] {
        self.state
            .markers
            .as_ref()
            .map(|g| g.markers.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces the whole marker set with one marker per record.
    ///
    /// The previous layer group is removed before the new one is attached, so
    /// the map never shows old and new markers together.
    pub fn refresh(&mut self, records: &[Record]) {
        if let Some(old) = self.state.markers.take() {
            self.surface.remove_layer(old.layer);
        }

        let layer = self.surface.add_layer();
        let mut markers = Vec::with_capacity(records.len());

        for record in records {
            let position = LatLng {
                lat: record.lat,
                lng: record.lon,
            };
            let id = self.surface.place_marker(layer, position);
            self.surface
                .set_icon(id, MarkerIcon::info(color_for(&record.property_type)));

            markers.push(PlacedMarker {
                id,
                properties: record.properties(),
            });
        }

        tracing::debug!(layer = layer.0, markers = markers.len(), "marker set refreshed");
        self.state.markers = Some(MarkerGroup { layer, markers });
    }

    /// Marker click: shows the marker's record in the sidebar and keeps the
    /// click from reaching the map background.
    pub fn on_marker_click(&mut self, marker: MarkerId) -> Result<Propagation, MapError> {
        let properties = self
            .markers()
            .iter()
            .find(|m| m.id == marker)
            .map(|m| m.properties.clone())
            .ok_or(MapError::UnknownMarker(marker))?;

        self.state.sidebar.open(&properties);
        Ok(Propagation::Stop)
    }

    /// Background click: closes the sidebar, whatever it was showing.
    pub fn on_map_click(&mut self) {
        self.state.sidebar.close();
    }

    /// Delivers a click the way the browser would: the target first, then the
    /// map background unless the target stopped it.
    pub fn click(&mut self, target: ClickTarget) -> Result<(), MapError> {
        let propagation = match target {
            ClickTarget::Marker(id) => self.on_marker_click(id)?,
            ClickTarget::Background => Propagation::Continue,
        };
        if propagation == Propagation::Continue {
            self.on_map_click();
        }
        Ok(())
    }
}
