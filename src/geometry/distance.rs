use geo::{Distance, Geodesic};

use crate::domain::Coordinate;

/// Geodesic surface distance between two coordinates, in kilometers
/// rounded to 2 decimal places.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let meters = Geodesic::distance(from.point(), to.point());
    let km = meters / 1000.0;
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let origin = Coordinate::new(13.6288, 79.4192);
        assert_eq!(distance_km(origin, origin), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(13.6288, 79.4192);
        let b = Coordinate::new(13.6833, 79.3474);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        // 1 degree of latitude is roughly 111 km everywhere
        let a = Coordinate::new(13.0, 79.0);
        let b = Coordinate::new(14.0, 79.0);
        let d = distance_km(a, b);
        assert!((d - 110.6).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_distance_rounded_to_two_decimals() {
        let a = Coordinate::new(13.6288, 79.4192);
        let b = Coordinate::new(13.6351, 79.4281);
        let d = distance_km(a, b);
        assert_eq!((d * 100.0).round() / 100.0, d);
    }
}
