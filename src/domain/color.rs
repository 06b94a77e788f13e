// src/domain/color.rs

use serde::Serialize;

/// Marker tints understood by the awesome-markers icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Blue,
}

#[cfg(test)]
impl MarkerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Blue => "blue",
        }
    }
}

/// Picks the marker tint for a property type.
///
/// Unknown types share the house color. That is how the listings have always
/// been shown, so it stays until someone decides otherwise.
pub fn color_for(property_type: &str) -> MarkerColor {
    match property_type {
        "house" => MarkerColor::Green,
        "plot" => MarkerColor::Blue,
        _ => MarkerColor::Green,
    }
}
