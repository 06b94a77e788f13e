mod canvas;
mod controller;
mod surface;
mod views;

pub use canvas::{CanvasMarker, MapCanvas};
pub use controller::{ClickTarget, MapViewController};
pub use surface::MarkerId;
pub use views::{ViewId, ViewRegistry, DEFAULT_MAX_VIEWS};

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    UnknownMarker(MarkerId),
    UnknownView(ViewId),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::UnknownMarker(id) => write!(f, "No marker {} on the map", id.0),
            MapError::UnknownView(id) => write!(f, "No map view {}", id.0),
        }
    }
}

impl Error for MapError {}
