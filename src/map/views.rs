// map/views.rs
use crate::map::{MapCanvas, MapViewController};
use serde::Serialize;
use std::collections::BTreeMap;

pub type MapView = MapViewController<MapCanvas>;

pub const DEFAULT_MAX_VIEWS: usize = 256;

/// Names the map view created by one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ViewId(pub u64);

/// One map view per page load, so a second tab never redraws or closes the
/// first one. Ids only grow; when the registry is full the oldest view goes.
pub struct ViewRegistry {
    next_id: u64,
    max_views: usize,
    views: BTreeMap<ViewId, MapView>,
}

impl ViewRegistry {
    pub fn new(max_views: usize) -> Self {
        Self {
            next_id: 0,
            max_views: max_views.max(1),
            views: BTreeMap::new(),
        }
    }

    /// Starts a fresh view: no markers, sidebar closed.
    pub fn open(&mut self) -> (ViewId, &mut MapView) {
        while self.views.len() >= self.max_views {
            let Some((evicted, _)) = self.views.pop_first() else {
                break;
            };
            tracing::debug!(view = evicted.0, "map view evicted");
        }

        self.next_id += 1;
        let id = ViewId(self.next_id);
        let view = self
            .views
            .entry(id)
            .or_insert_with(|| MapViewController::new(MapCanvas::new()));
        (id, view)
    }

    pub fn get(&self, id: ViewId) -> Option<&MapView> {
        self.views.get(&id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut MapView> {
        self.views.get_mut(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.views.len()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VIEWS)
    }
}
