use geo::Point;

/// A WGS84 coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to a geo point (x = lon, y = lat)
    pub fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}
