use crate::api::Element;
use crate::domain::{Coordinate, MapFeature};

/// Parse raw Overpass elements into domain map features.
///
/// Keeps the order elements were delivered in. Non-node elements and nodes
/// without coordinates are dropped; missing tag maps become empty maps.
pub fn parse_features(elements: &[Element]) -> Vec<MapFeature> {
    elements
        .iter()
        .filter(|e| e.type_ == "node")
        .filter_map(|e| {
            let lat = e.lat?;
            let lon = e.lon?;
            Some(MapFeature::new(
                e.id,
                Coordinate::new(lat, lon),
                e.tags.clone().unwrap_or_default(),
            ))
        })
        .collect()
}
