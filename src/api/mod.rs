pub mod nominatim;
pub mod overpass;

pub use nominatim::geocode_place;
pub use overpass::{Element, OverpassResponse, fetch_nearby};
