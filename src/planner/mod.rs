use crate::api::fetch_nearby;
use crate::config::OverpassConfig;
use crate::domain::{Coordinate, MapFeature, PlanEntry, TimeBudget};
use crate::geometry::distance_km;
use crate::osm::parse_features;

/// At most this many fetched features are considered for a plan
pub const MAX_CANDIDATES: usize = 8;

const ATTRACTION_TAG: (&str, &str) = ("tourism", "attraction");

/// Build a nearest-first visit plan for tourist attractions around an origin.
///
/// An empty result means either no attractions nearby or a feature-query
/// failure; callers render both as a warning.
pub fn build_plan(
    origin: Coordinate,
    budget: TimeBudget,
    radius_m: u32,
    overpass: &OverpassConfig,
) -> Vec<PlanEntry> {
    let (key, value) = ATTRACTION_TAG;
    let elements = fetch_nearby(origin, key, value, radius_m, overpass);
    let attractions = parse_features(&elements);
    plan_from_features(origin, &attractions, budget)
}

/// Rank features nearest-first and truncate to the time budget.
///
/// Takes at most the first `MAX_CANDIDATES` features in delivery order,
/// computes rounded geodesic distances from the origin, sorts ascending
/// (stable, so equal distances keep delivery order) and keeps
/// `budget.max_stops()` entries.
pub fn plan_from_features(
    origin: Coordinate,
    features: &[MapFeature],
    budget: TimeBudget,
) -> Vec<PlanEntry> {
    let mut entries: Vec<PlanEntry> = features
        .iter()
        .take(MAX_CANDIDATES)
        .map(|feature| PlanEntry {
            name: feature.display_name().to_string(),
            distance_km: distance_km(origin, feature.coordinate),
        })
        .collect();

    entries.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    entries.truncate(budget.max_stops());
    entries
}
