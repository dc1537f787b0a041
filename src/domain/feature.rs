use std::collections::HashMap;

use crate::domain::Coordinate;

/// Placeholder for features that carry no name tag
pub const UNNAMED_PLACE: &str = "Unnamed Place";

/// A tagged map feature returned by the feature-query service
#[derive(Debug, Clone)]
pub struct MapFeature {
    pub id: u64,
    pub coordinate: Coordinate,
    /// Free-form OSM tags (e.g. name, tourism, amenity)
    pub tags: HashMap<String, String>,
}

impl MapFeature {
    pub fn new(id: u64, coordinate: Coordinate, tags: HashMap<String, String>) -> Self {
        Self {
            id,
            coordinate,
            tags,
        }
    }

    /// Display name from the "name" tag, with a fixed fallback
    pub fn display_name(&self) -> &str {
        self.tags
            .get("name")
            .map(String::as_str)
            .unwrap_or(UNNAMED_PLACE)
    }
}
