//! Haversine great-circle metric.
//!
//! Opt-in alternative to the planar default. Produces kilometers, so routes
//! built with it can differ from Euclidean ones for the same input.

use crate::coordinate::Coordinate;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone)]
pub struct HaversineMetric {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for HaversineMetric {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl HaversineMetric {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    fn central_angle(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * a.min(1.0).sqrt().asin()
    }
}

impl DistanceMetric for HaversineMetric {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        self.radius_km * Self::central_angle(from.coords(), to.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = HaversineMetric::default().distance(&c(36.1, -115.1), &c(36.1, -115.1));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24)
        // Actual distance ~370 km
        let dist = HaversineMetric::default().distance(&c(36.17, -115.14), &c(34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let metric = HaversineMetric::default();
        let a = c(36.1, -115.1);
        let b = c(36.2, -115.2);
        assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let metric = HaversineMetric::new(1.0);
        let dist = metric.distance(&c(0.0, 0.0), &c(0.0, 180.0));
        assert!((dist - std::f64::consts::PI).abs() < 1e-9);
    }
}
