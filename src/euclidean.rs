//! Planar distance over raw degrees.
//!
//! Treats (lat, lng) as x/y on a flat plane. This is the default metric and
//! the one the route ordering contract is stated in.

use crate::coordinate::Coordinate;
use crate::traits::DistanceMetric;

#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMetric;

impl DistanceMetric for EuclideanMetric {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        // Equal squared sums must give bit-equal distances, which `hypot` does not.
        let dlat = from.lat() - to.lat();
        let dlng = from.lng() - to.lng();
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Shorthand for [`EuclideanMetric`].
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    EuclideanMetric.distance(from, to)
}
